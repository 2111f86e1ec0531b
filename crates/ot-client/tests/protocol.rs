//! End-to-end protocol tests
//!
//! Drive a `Session` over an in-memory frameset: serialize the page,
//! check what went over the wire, feed replies back in.

use ot_client::capability::AllDom;
use ot_client::{classify, checkbox_state, CapabilityMode, Config, FieldKind, Session};
use ot_dom::{
    Document, Element, Features, Form, Frame, Frameset, InputElement, Layer, OptionElement,
    SelectElement, TextareaElement, COMM_FRAME,
};
use ot_wire::{decode, Content, Value, QUERY_PARAM};

fn signup_page() -> Document {
    Document::new("http://shop/signup")
        .with_title("Sign up")
        .with_element(Element::new("div").with_id("banner").with_inner_html("Welcome").into_ref())
        .with_form(
            Form::new()
                .with_control(Element::input("username", InputElement::text().with_value("ada")).into_ref())
                .with_control(Element::input("password", InputElement::password().with_value("s3cret")).into_ref())
                .with_control(
                    Element::textarea("bio", TextareaElement::new().with_value("Counts <things>")).into_ref(),
                )
                .with_control(Element::input("newsletter", InputElement::checkbox()).into_ref())
                .with_control(Element::input("plan", InputElement::radio("free")).into_ref())
                .with_control(Element::input("plan", InputElement::radio("pro")).into_ref())
                .with_control(
                    Element::select(
                        "country",
                        SelectElement::new().with_options(vec![
                            OptionElement::new("Norway", "no"),
                            OptionElement::new("Italy", "it"),
                        ]),
                    )
                    .into_ref(),
                ),
        )
}

fn config() -> Config {
    Config {
        session_id: "abc123".to_string(),
        run_mode_param: "mode".to_string(),
        null_reply: "No reply from server".to_string(),
        ..Config::default()
    }
}

fn session() -> Session<Frameset> {
    Session::new(config(), Frameset::new(signup_page(), Features::standards()))
}

/// Decode the packet the communication frame was last pointed at
fn last_packet(session: &Session<Frameset>) -> ot_wire::ParameterSet {
    let location = &session.host().frame(COMM_FRAME).unwrap().location;
    let marker = format!("?{}=", QUERY_PARAM);
    let (_, packet) = location.split_once(&marker).unwrap();
    decode(packet).unwrap()
}

// ============================================================================
// REQUESTS
// ============================================================================

#[test]
fn test_classify_order_preserved() {
    let c = classify(&["/save.cgi", "b", "x=1", "a", "y=2", "c"]);
    assert_eq!(c.fields, vec!["b", "a", "c"]);
    assert_eq!(c.expr, vec!["x=1", "y=2"]);

    let c = classify(&["/save.cgi", "username", "action=commit"]);
    assert_eq!(c.fields, vec!["username"]);
    assert_eq!(c.expr, vec!["action=commit"]);
}

#[test]
fn test_background_request_round_trip() {
    let mut session = session();
    session.call_url(&["/save.cgi", "username", "bio", "newsletter", "plan", "country", "action=commit"]);

    let set = last_packet(&session);
    let fields = set.fields.unwrap();
    assert_eq!(fields.get("username"), Some("ada"));
    assert_eq!(fields.get("bio"), Some("Counts <things>"));
    assert_eq!(fields.get("newsletter"), Some("0"));
    assert_eq!(fields.get("plan"), Some("0"));
    assert_eq!(fields.get("country"), Some("-1"));
    assert_eq!(set.expr.unwrap().get("action"), Some("commit"));

    let expected: ot_wire::Group = [("session_id", "abc123"), ("need_script", "1"), ("runmode_param", "mode")]
        .into_iter()
        .collect();
    assert_eq!(set.settings, expected);
}

#[test]
fn test_background_request_keeps_page() {
    let mut session = session();
    session.set_run_mode("edit");
    session.call_url(&["/save.cgi", "username"]);

    assert_eq!(session.run_mode(), "");
    assert_eq!(session.host().content().location, "http://shop/signup");
    assert_eq!(session.host().status, "Fetching...");
}

#[test]
fn test_run_mode_travels_with_request() {
    let mut session = session();
    session.call_url(&["/save.cgi", "mode=preview"]);
    assert_eq!(last_packet(&session).settings.get("runmode"), Some("preview"));
    assert_eq!(session.run_mode(), "");
}

#[test]
fn test_frame_qualified_field() {
    let side = Document::new("http://shop/side").with_form(
        Form::new().with_control(Element::input("username", InputElement::hidden().with_value("side-ada")).into_ref()),
    );
    let host = Frameset::new(signup_page(), Features::standards()).with_frame(Frame::new("side", side));
    let mut session = Session::new(config(), host);

    session.call_url(&["/save.cgi", "username?side", "username", "first name=Ada"]);
    let set = last_packet(&session);
    let fields = set.fields.unwrap();
    assert_eq!(fields.get("username?side"), Some("side-ada"));
    assert_eq!(fields.get("username"), Some("ada"));
    assert_eq!(set.expr.unwrap().get("first name"), Some("Ada"));
}

#[test]
fn test_all_collection_lookup_on_legacy_browsers() {
    let mut session = Session::new(config(), Frameset::new(signup_page(), Features::legacy_all()));
    assert_eq!(session.mode(), CapabilityMode::LegacyAll);

    // No id scope here: only `document.all` reaches the banner
    let banner = session.resolve("banner").unwrap();
    assert!(matches!(banner.kind, Some(FieldKind::RenderedContent(_))));

    let mut standards = Session::with_capability(
        config(),
        Frameset::new(signup_page(), Features::standards()),
        Box::new(AllDom::new()),
    );
    assert!(standards.resolve("banner").is_none());
}

#[test]
fn test_layers_are_searched_on_legacy_browsers() {
    let nested = Document::new("layer").with_form(
        Form::new().with_control(Element::input("coupon", InputElement::text().with_value("SAVE10")).into_ref()),
    );
    let page = signup_page().with_layer(Layer::new("promo", nested));
    let mut layered = Session::new(config(), Frameset::new(page.clone(), Features::legacy_layers()));
    layered.call_url(&["/save.cgi", "coupon"]);
    assert_eq!(last_packet(&layered).fields.unwrap().get("coupon"), Some("SAVE10"));

    // Standards browsers have no layers to search
    let mut standards = Session::new(config(), Frameset::new(page, Features::standards()));
    standards.call_url(&["/save.cgi", "coupon"]);
    assert!(last_packet(&standards).fields.is_none());
}

// ============================================================================
// OBJECT CACHE
// ============================================================================

#[test]
fn test_cached_lookup_is_stable() {
    let mut session = session();
    let a = session.resolve("username").unwrap();
    let b = session.resolve("username").unwrap();
    assert!(a.same_as(&b));
}

#[test]
fn test_invalidate_after_removal() {
    let mut session = session();
    let shadow = Element::input("username", InputElement::text().with_value("shadow")).into_ref();
    session.host_mut().content_mut().document.prepend_element(shadow.clone());
    assert!(session.resolve("username").unwrap().handle.first().unwrap().ptr_eq(&shadow));

    assert_eq!(session.host_mut().content_mut().document.remove_elements("username"), 1);
    session.expire_cache();
    let field = session.element("username").unwrap();
    assert_eq!(field.first().unwrap().borrow().value(), Some("ada"));
}

#[test]
fn test_invalidate_picks_up_shadowing_element() {
    let mut session = session();
    let before = session.resolve("username").unwrap();

    let shadow = Element::input("username", InputElement::text().with_value("shadow")).into_ref();
    session.host_mut().content_mut().document.prepend_element(shadow.clone());

    // Stale until expired
    assert!(session.resolve("username").unwrap().same_as(&before));

    session.expire_cache();
    let after = session.resolve("username").unwrap();
    assert!(!after.same_as(&before));
    assert!(after.handle.first().unwrap().ptr_eq(&shadow));
}

// ============================================================================
// REPLIES
// ============================================================================

#[test]
fn test_null_reply_alerts_once() {
    let mut session = session();
    assert_eq!(session.update(None), 0);
    assert_eq!(session.host().alerts, vec!["No reply from server"]);

    let username = session.element("username").unwrap();
    assert_eq!(username.first().unwrap().borrow().value(), Some("ada"));
}

#[test]
fn test_reply_fills_every_kind() {
    let mut session = session();
    let content = Content::from_json(
        r#"{
            "username": "grace",
            "bio": "Writes compilers",
            "newsletter": "true",
            "plan": "pro",
            "country": [["Sweden", "se"], ["Spain", "es"]],
            "banner": "<b>Saved</b>",
            "nobody": "ignored"
        }"#,
    )
    .unwrap();

    assert_eq!(session.update(Some(&content)), 6);
    assert_eq!(session.host().status, "Done.");

    let value = |s: &mut Session<Frameset>, name: &str| {
        s.element(name).unwrap().first().unwrap().borrow().value().map(str::to_string)
    };
    assert_eq!(value(&mut session, "username").as_deref(), Some("grace"));
    assert_eq!(value(&mut session, "bio").as_deref(), Some("Writes compilers"));

    let newsletter = session.element("newsletter").unwrap();
    assert!(newsletter.first().unwrap().borrow().checked());

    let plan = session.element("plan").unwrap();
    let checked: Vec<bool> = plan.elements().iter().map(|e| e.borrow().checked()).collect();
    assert_eq!(checked, vec![false, true]);

    let country = session.element("country").unwrap();
    let country = country.first().unwrap().borrow();
    let options: Vec<(&str, &str)> = country
        .as_select()
        .unwrap()
        .options
        .iter()
        .map(|o| (o.text.as_str(), o.value.as_str()))
        .collect();
    assert_eq!(options, vec![("Sweden", "se"), ("Spain", "es")]);
    drop(country);

    let banner = session.element("banner").unwrap();
    assert_eq!(banner.first().unwrap().borrow().inner_html, "<b>Saved</b>");
}

#[test]
fn test_checkbox_reply_values() {
    for value in ["false", "FALSE", "False", "unchecked", "0"] {
        assert!(!checkbox_state(value), "{}", value);
    }
    for value in ["true", "on", "1", "2"] {
        assert!(checkbox_state(value), "{}", value);
    }

    let mut session = session();
    session.update(Some(&Content::new().with("newsletter", Value::scalar("1"))));
    session.update(Some(&Content::new().with("newsletter", Value::scalar("False"))));
    let newsletter = session.element("newsletter").unwrap();
    assert!(!newsletter.first().unwrap().borrow().checked());
}

#[test]
fn test_empty_string_empties_selection() {
    let mut session = session();
    session.update(Some(&Content::new().with("country", Value::flat([""]))));

    let country = session.element("country").unwrap();
    assert_eq!(country.first().unwrap().borrow().as_select().unwrap().length(), 0);
}

#[test]
fn test_scalar_reply_selects_option() {
    let mut session = session();
    session.update(Some(&Content::new().with("country", Value::scalar("it"))));
    session.call_url(&["/save.cgi", "country"]);
    assert_eq!(last_packet(&session).fields.unwrap().get("country"), Some("it"));
}

#[test]
fn test_unmatched_scalar_is_not_counted() {
    let mut session = session();
    let content = Content::new()
        .with("country", Value::scalar("zz"))
        .with("username", Value::scalar("grace"));
    assert_eq!(session.update(Some(&content)), 1);

    let country = session.element("country").unwrap();
    assert_eq!(country.first().unwrap().borrow().as_select().unwrap().selected_index(), -1);
}

#[test]
fn test_radio_without_match_changes_nothing() {
    let mut session = session();
    session.update(Some(&Content::new().with("plan", Value::scalar("enterprise"))));

    let plan = session.element("plan").unwrap();
    assert!(plan.elements().iter().all(|e| !e.borrow().checked()));

    session.call_url(&["/save.cgi", "plan"]);
    assert_eq!(last_packet(&session).fields.unwrap().get("plan"), Some("0"));
}

#[test]
fn test_option_text_clipped_to_width() {
    let mut session = session();
    session.set_max_select_width(3);
    session.update(Some(&Content::new().with("country", Value::pairs([("Germany", "de")]))));

    let country = session.element("country").unwrap();
    let country = country.first().unwrap().borrow();
    let option = &country.as_select().unwrap().options[0];
    assert_eq!((option.text.as_str(), option.value.as_str()), ("Ger", "de"));
}

#[test]
fn test_option_text_unclipped_on_layer_browsers() {
    let mut session = Session::new(config(), Frameset::new(signup_page(), Features::legacy_layers()));
    assert_eq!(session.mode(), CapabilityMode::LegacyLayers);
    session.set_max_select_width(3);
    session.update(Some(&Content::new().with("country", Value::pairs([("Germany", "de")]))));

    let country = session.element("country").unwrap();
    let country = country.first().unwrap().borrow();
    let option = &country.as_select().unwrap().options[0];
    assert_eq!((option.text.as_str(), option.value.as_str()), ("Germany", "de"));
}

// ============================================================================
// PAGE LOADS
// ============================================================================

#[test]
fn test_fetch_html_replaces_content() {
    let mut session = session();
    session.resolve("username");
    session.fetch_html(&["/profile.cgi", "username"]);

    let host = session.host();
    assert!(host.content().location.starts_with("/profile.cgi?OpenThought="));
    assert_eq!(host.communication().location, "about:blank");

    // The new page arrives; cached handles from the old one must not leak
    session.host_mut().load(
        ot_dom::CONTENT_FRAME,
        Document::new("http://shop/profile").with_title("Profile").with_form(
            Form::new().with_control(Element::input("username", InputElement::text().with_value("new")).into_ref()),
        ),
    );
    let username = session.element("username").unwrap();
    assert_eq!(username.first().unwrap().borrow().value(), Some("new"));
}
