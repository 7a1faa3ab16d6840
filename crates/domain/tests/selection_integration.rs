//! Integration tests for the selection form reducer driven by full event
//! flows, mirroring what the cascade produces at runtime.

use common::{CheckoutId, RequestSeq};
use domain::{
    CountryCode, LocationOption, LookupStage, Price, SelectionEvent, SelectionForm,
    ShippingOption, SubdivisionCode,
};

fn countries() -> Vec<LocationOption> {
    vec![
        LocationOption::new("TW", "Taiwan"),
        LocationOption::new("US", "United States"),
        LocationOption::new("JP", "Japan"),
    ]
}

fn tw_subdivisions() -> Vec<LocationOption> {
    vec![
        LocationOption::new("TW-TPE", "Taipei City"),
        LocationOption::new("TW-KHH", "Kaohsiung City"),
    ]
}

fn us_subdivisions() -> Vec<LocationOption> {
    vec![
        LocationOption::new("CA", "California"),
        LocationOption::new("NY", "New York"),
    ]
}

fn tw_options() -> Vec<ShippingOption> {
    vec![
        ShippingOption::new("ship_tw_std", "Domestic", Price::new("NT$60")),
        ShippingOption::new("ship_tw_exp", "Domestic Express", Price::new("NT$120")),
    ]
}

fn us_options() -> Vec<ShippingOption> {
    vec![ShippingOption::new(
        "ship_us_intl",
        "International",
        Price::new("$25.00"),
    )]
}

/// Replays the full happy-path cascade: session, countries, subdivisions,
/// shipping options, each default derived from the first backend entry.
#[test]
fn test_full_cascade_establishes_defaults() {
    let mut form = SelectionForm::default();
    let mut seq = RequestSeq::first();

    form.apply(SelectionEvent::session_ready(CheckoutId::new("chkt_1")));

    form.apply(SelectionEvent::lookup_started(LookupStage::Countries, seq));
    form.apply(SelectionEvent::countries_resolved(seq, countries()));
    assert_eq!(form.selected_country().unwrap().as_str(), "TW");

    seq = seq.next();
    form.apply(SelectionEvent::lookup_started(LookupStage::Subdivisions, seq));
    form.apply(SelectionEvent::subdivisions_resolved(seq, tw_subdivisions()));
    assert_eq!(form.selected_subdivision().unwrap().as_str(), "TW-TPE");

    seq = seq.next();
    form.apply(SelectionEvent::lookup_started(
        LookupStage::ShippingOptions,
        seq,
    ));
    form.apply(SelectionEvent::shipping_options_resolved(seq, tw_options()));
    assert_eq!(
        form.selected_shipping_option().unwrap().as_str(),
        "ship_tw_std"
    );

    assert!(form.selection().is_complete());
    assert_eq!(form.stale_discards(), 0);
}

/// The ordering invariant: changing country A→B rapidly, where B's chain
/// resolves before A's shipping lookup, must leave B's selection in place
/// when A's stale result finally arrives.
#[test]
fn test_rapid_country_change_ordering_invariant() {
    let mut form = SelectionForm::default();
    form.apply(SelectionEvent::session_ready(CheckoutId::new("chkt_1")));

    // Country A (TW) resolves through its subdivision default; its shipping
    // lookup (seq 3) goes out but has not resolved yet.
    form.apply(SelectionEvent::lookup_started(
        LookupStage::Countries,
        RequestSeq::new(1),
    ));
    form.apply(SelectionEvent::countries_resolved(RequestSeq::new(1), countries()));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::Subdivisions,
        RequestSeq::new(2),
    ));
    form.apply(SelectionEvent::subdivisions_resolved(
        RequestSeq::new(2),
        tw_subdivisions(),
    ));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::ShippingOptions,
        RequestSeq::new(3),
    ));

    // User switches to B (US) before A's shipping options arrive.
    form.apply(SelectionEvent::country_selected(CountryCode::new("US")));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::Subdivisions,
        RequestSeq::new(4),
    ));
    form.apply(SelectionEvent::subdivisions_resolved(
        RequestSeq::new(4),
        us_subdivisions(),
    ));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::ShippingOptions,
        RequestSeq::new(5),
    ));
    form.apply(SelectionEvent::shipping_options_resolved(
        RequestSeq::new(5),
        us_options(),
    ));

    // A's shipping options resolve late and must be discarded.
    form.apply(SelectionEvent::shipping_options_resolved(
        RequestSeq::new(3),
        tw_options(),
    ));

    assert_eq!(form.selected_country().unwrap().as_str(), "US");
    assert_eq!(form.selected_subdivision().unwrap().as_str(), "CA");
    assert_eq!(
        form.selected_shipping_option().unwrap().as_str(),
        "ship_us_intl"
    );
    assert_eq!(form.shipping_options().len(), 1);
    assert_eq!(form.stale_discards(), 1);
}

/// A user's explicit subdivision selection made while the default lookup
/// is still in flight wins over the backend default.
#[test]
fn test_user_subdivision_survives_late_default() {
    let mut form = SelectionForm::default();
    form.apply(SelectionEvent::session_ready(CheckoutId::new("chkt_1")));

    form.apply(SelectionEvent::lookup_started(
        LookupStage::Subdivisions,
        RequestSeq::new(1),
    ));
    // The user saw a cached list and picked Kaohsiung before the fresh
    // lookup resolved.
    form.apply(SelectionEvent::subdivision_selected(SubdivisionCode::new(
        "TW-KHH",
    )));
    form.apply(SelectionEvent::subdivisions_resolved(
        RequestSeq::new(1),
        tw_subdivisions(),
    ));

    assert_eq!(form.selected_subdivision().unwrap().as_str(), "TW-KHH");
    assert_eq!(form.subdivisions().len(), 2);
}

/// Empty results at any stage establish no default and leave the form in
/// a consistent partial state.
#[test]
fn test_empty_results_do_not_cascade() {
    let mut form = SelectionForm::default();
    form.apply(SelectionEvent::session_ready(CheckoutId::new("chkt_1")));

    form.apply(SelectionEvent::lookup_started(
        LookupStage::Countries,
        RequestSeq::new(1),
    ));
    form.apply(SelectionEvent::countries_resolved(RequestSeq::new(1), countries()));

    form.apply(SelectionEvent::lookup_started(
        LookupStage::Subdivisions,
        RequestSeq::new(2),
    ));
    form.apply(SelectionEvent::subdivisions_resolved(RequestSeq::new(2), vec![]));

    assert_eq!(form.selected_country().unwrap().as_str(), "TW");
    assert!(form.selected_subdivision().is_none());
    assert!(form.selected_shipping_option().is_none());
    assert!(!form.selection().is_complete());
}

/// A failure mid-chain surfaces through last_error while everything
/// resolved so far keeps its last-known-good value.
#[test]
fn test_failure_keeps_upstream_state() {
    let mut form = SelectionForm::default();
    form.apply(SelectionEvent::session_ready(CheckoutId::new("chkt_1")));

    form.apply(SelectionEvent::lookup_started(
        LookupStage::Countries,
        RequestSeq::new(1),
    ));
    form.apply(SelectionEvent::countries_resolved(RequestSeq::new(1), countries()));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::Subdivisions,
        RequestSeq::new(2),
    ));
    form.apply(SelectionEvent::subdivisions_resolved(
        RequestSeq::new(2),
        tw_subdivisions(),
    ));
    form.apply(SelectionEvent::lookup_started(
        LookupStage::ShippingOptions,
        RequestSeq::new(3),
    ));
    form.apply(SelectionEvent::lookup_failed(
        LookupStage::ShippingOptions,
        RequestSeq::new(3),
        "rates unavailable",
    ));

    let failure = form.last_error().unwrap();
    assert_eq!(failure.stage, LookupStage::ShippingOptions);
    assert_eq!(form.selected_country().unwrap().as_str(), "TW");
    assert_eq!(form.selected_subdivision().unwrap().as_str(), "TW-TPE");
    assert!(form.selected_shipping_option().is_none());
}

/// Replaying the same event sequence yields identical state.
#[test]
fn test_replay_is_deterministic() {
    let events = vec![
        SelectionEvent::session_ready(CheckoutId::new("chkt_1")),
        SelectionEvent::lookup_started(LookupStage::Countries, RequestSeq::new(1)),
        SelectionEvent::countries_resolved(RequestSeq::new(1), countries()),
        SelectionEvent::country_selected(CountryCode::new("JP")),
        SelectionEvent::lookup_started(LookupStage::Subdivisions, RequestSeq::new(2)),
        SelectionEvent::subdivisions_resolved(RequestSeq::new(2), vec![]),
    ];

    let mut a = SelectionForm::default();
    a.apply_events(events.clone());
    let mut b = SelectionForm::default();
    b.apply_events(events);

    assert_eq!(a.selection(), b.selection());
    assert_eq!(a.countries(), b.countries());
    assert_eq!(a.stale_discards(), b.stale_discards());
}
