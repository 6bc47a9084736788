mod common;

use std::time::Duration;

use rosc::OscType;

use faderdeck_net::dispatch::submit;
use faderdeck_net::engine;
use faderdeck_net::queue::SendQueue;
use faderdeck_net::session::Session;
use faderdeck_types::{Bus, ControlId, ControlSurface, FaderParam, Page, SlotId};

use common::{FakeMixer, PanelStub};

fn populated_session() -> Session {
    let mut session = Session::new();
    let input = session.channels_mut(Bus::Input);
    input.set_name(SlotId::new(1), "Mic 1");
    input.set_name(SlotId::new(2), "Mic 2");
    input.set_name(SlotId::new(3), "SPDIF");
    let output = session.channels_mut(Bus::Output);
    output.set_name(SlotId::new(1), "Main");
    output.set_name(SlotId::new(2), "Speaker B");
    session
}

#[test]
fn announced_names_fill_the_per_bus_registries() {
    let mut mixer = FakeMixer::start().unwrap();
    let link = common::panel_link(&mixer);
    let mut queue = SendQueue::new(64, None);
    let mut session = Session::new();
    let mut panel = PanelStub::new();

    submit(&link, &mut queue, engine::set_bus(Page::One, Bus::Input).unwrap()).unwrap();
    assert!(mixer.recv().is_some());
    mixer.announce_bus("Input", &["Mic 1", "Mic 2", "SPDIF"]);

    common::drive_until(
        &link,
        &mut queue,
        &mut session,
        &mut panel,
        Duration::from_secs(2),
        |session, _| session.channels(Bus::Input).count() == 3,
    );

    let input = session.channels(Bus::Input);
    assert_eq!(input.name_for_slot(SlotId::new(1)), Some("Mic 1"));
    assert_eq!(input.name_for_slot(SlotId::new(2)), Some("Mic 2"));
    assert_eq!(input.name_for_slot(SlotId::new(3)), Some("SPDIF"));
    assert!(session.channels(Bus::Output).is_empty());
}

#[test]
fn selects_rewind_fully_then_step_forward() {
    let mut mixer = FakeMixer::start().unwrap();
    let link = common::panel_link(&mixer);
    let mut queue = SendQueue::new(64, None);
    let session = populated_session();

    let packet =
        engine::select_channel(session.channels(Bus::Output), Page::Two, Bus::Output, "Speaker B")
            .unwrap();
    submit(&link, &mut queue, packet).unwrap();

    let received = common::flatten(&mixer.recv_all(Duration::from_millis(80)));
    assert_eq!(
        common::addrs(&received),
        vec!["/2/busOutput", "/2/track-", "/2/track-", "/2/track+"]
    );
}

#[test]
fn fader_moves_carry_the_scaled_value() {
    let mut mixer = FakeMixer::start().unwrap();
    let link = common::panel_link(&mixer);
    let mut queue = SendQueue::new(64, None);
    let session = populated_session();

    let packet = engine::set_fader(
        session.channels(Bus::Output),
        Page::Two,
        Bus::Output,
        "Main",
        FaderParam::Volume,
        820,
    )
    .unwrap();
    submit(&link, &mut queue, packet).unwrap();

    let received = common::flatten(&mixer.recv_all(Duration::from_millis(80)));
    let last = received.last().expect("no bundle arrived");
    assert_eq!(last.addr, "/2/volume");
    match last.args[0] {
        OscType::Float(v) => assert!((v - 0.8205).abs() < 1e-6),
        ref other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn selected_channel_echoes_refresh_the_bound_controls() {
    let mut mixer = FakeMixer::start().unwrap();
    let link = common::panel_link(&mixer);
    let mut queue = SendQueue::new(64, None);
    let mut session = populated_session();
    let mut panel = PanelStub::new();

    let packet =
        engine::select_channel(session.channels(Bus::Output), Page::Two, Bus::Output, "Main")
            .unwrap();
    submit(&link, &mut queue, packet).unwrap();
    assert!(mixer.recv().is_some());

    // the remote answers a select with the bus echo, the parameter
    // values of the newly selected channel, then its name
    mixer.send_float("/2/busOutput", 1.0);
    mixer.send_float("/2/volume", 0.6);
    mixer.send_float("/2/eqGain1", 0.1);
    mixer.send_float("/2/eqGain2", 0.2);
    mixer.send_float("/2/eqGain3", 0.3);
    mixer.send_float("/2/eqEnable", 1.0);
    mixer.send_str("/2/trackname", "Main");

    common::drive_until(
        &link,
        &mut queue,
        &mut session,
        &mut panel,
        Duration::from_secs(2),
        |_, panel| panel.value(ControlId::Main) == 600,
    );

    assert_eq!(panel.value(ControlId::Bass), 100);
    assert_eq!(panel.value(ControlId::Mid), 200);
    assert_eq!(panel.value(ControlId::Treble), 300);
    assert_eq!(panel.value(ControlId::EqToggle), 1);
    // Phones binds Speaker B, not Main
    assert_eq!(panel.value(ControlId::Phones), 0);
}

#[test]
fn a_refresh_round_reselects_the_four_panel_channels() {
    let mut mixer = FakeMixer::start().unwrap();
    let link = common::panel_link(&mixer);
    let mut queue = SendQueue::new(64, None);
    let mut session = populated_session();
    let mut panel = PanelStub::new();

    for packet in engine::refresh_round(&session).unwrap() {
        submit(&link, &mut queue, packet).unwrap();
    }

    // Mic 1: slot 1 of 3, rewind only
    let first = common::flatten(&mixer.recv_all(Duration::from_millis(80)));
    assert_eq!(
        common::addrs(&first),
        vec!["/2/busInput", "/2/track-", "/2/track-", "/2/track-"]
    );

    // SPDIF: slot 3 of 3
    let released = common::release_next(&mut mixer, &link, &mut queue, &mut session, &mut panel);
    assert_eq!(
        common::addrs(&released),
        vec![
            "/2/busInput",
            "/2/track-",
            "/2/track-",
            "/2/track-",
            "/2/track+",
            "/2/track+",
        ]
    );

    // Main: slot 1 of 2
    let released = common::release_next(&mut mixer, &link, &mut queue, &mut session, &mut panel);
    assert_eq!(
        common::addrs(&released),
        vec!["/2/busOutput", "/2/track-", "/2/track-"]
    );

    // Speaker B: slot 2 of 2
    let released = common::release_next(&mut mixer, &link, &mut queue, &mut session, &mut panel);
    assert_eq!(
        common::addrs(&released),
        vec!["/2/busOutput", "/2/track-", "/2/track-", "/2/track+"]
    );
}
