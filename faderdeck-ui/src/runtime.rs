//! The panel event loop: inbound polling, command handling, outbound
//! pacing, and the periodic channel refresh.

use std::io;
use std::time::{Duration, Instant};

use faderdeck_net::dispatch::{poll_pass, submit};
use faderdeck_net::engine;
use faderdeck_net::link::UdpLink;
use faderdeck_net::queue::SendQueue;
use faderdeck_net::session::{Phase, Session};
use faderdeck_types::{send_targets, Bus, ControlId, ControlSurface, Page};

use crate::commands::{self, Command};
use crate::config::Config;
use crate::panel::Panel;

/// Poll cadence of the main loop.
const TICK: Duration = Duration::from_millis(2);

pub fn run(config: &Config) -> io::Result<()> {
    let link = UdpLink::bind(&config.local_addr(), &config.remote_addr())?;
    log::info!(
        "panel on {}, mixer at {}",
        link.local_addr()?,
        link.remote_addr()
    );

    let mut queue = SendQueue::new(config.queue_capacity(), config.reply_timeout());
    let mut session = Session::new();
    let mut panel = Panel::new();
    let command_rx = commands::spawn_reader();

    session.begin_discovery();
    for packet in engine::discovery_burst(&session)? {
        if let Err(e) = submit(&link, &mut queue, packet) {
            log::debug!("send error: {}", e);
        }
    }

    let mut last_refresh = Instant::now();
    let mut announced_ready = false;
    let mut quit = false;

    loop {
        // Socket errors after bind are transient (the remote may be
        // down); the watchdog recovers the queue if the line stays dead.
        if let Err(e) = poll_pass(&link, &mut queue, &mut session, &mut panel) {
            log::debug!("receive error: {}", e);
        }

        if session.phase() == Phase::Ready && !announced_ready {
            announced_ready = true;
            last_refresh = Instant::now();
            println!("ready");
        }

        while let Ok(command) = command_rx.try_recv() {
            match command {
                Command::Set(control, value) => panel.adjust(control, value),
                Command::Toggle(control) => {
                    panel.flip(control);
                }
                Command::Show => print_panel(&panel, &session),
                Command::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        for (control, value) in panel.take_edits() {
            if let Err(e) = send_control(&link, &mut queue, &session, control, value) {
                log::debug!("send error: {}", e);
            }
        }

        if session.phase() == Phase::Ready
            && !panel.is_adjusting()
            && last_refresh.elapsed() >= config.refresh_interval()
        {
            last_refresh = Instant::now();
            for packet in engine::refresh_round(&session)? {
                if let Err(e) = submit(&link, &mut queue, packet) {
                    log::debug!("send error: {}", e);
                }
            }
        }

        std::thread::sleep(TICK);
    }

    if queue.len() > 0 {
        log::info!("shutting down with {} packets still queued", queue.len());
    }
    Ok(())
}

/// Transmit one user edit to every remote target of the control.
fn send_control(
    link: &UdpLink,
    queue: &mut SendQueue,
    session: &Session,
    control: ControlId,
    value: i32,
) -> io::Result<()> {
    for target in send_targets(control) {
        let map = session.channels(target.bus);
        let packet = if control.is_toggle() {
            engine::push_toggle(map, Page::Two, target.bus, target.channel, target.param)?
        } else {
            engine::set_fader(map, Page::Two, target.bus, target.channel, target.param, value)?
        };
        submit(link, queue, packet)?;
    }
    Ok(())
}

fn print_panel(panel: &Panel, session: &Session) {
    for id in ControlId::ALL {
        println!("{:<12} {:>4}", id.label(), panel.value(id));
    }
    for bus in Bus::ALL {
        let channels = session.channels(bus);
        if channels.is_empty() {
            continue;
        }
        let names: Vec<String> = channels
            .iter()
            .map(|(slot, channel)| format!("{}:{}", slot, channel.name))
            .collect();
        println!("{}: {}", bus, names.join(", "));
    }
}
