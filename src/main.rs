//! Showroom - scroll-driven cinematic vehicle showcase
//!
//! Headless host for the showcase: stands in for the scroll, pointer and
//! render providers by scripting a flight along the tour, narrating each stop
//! through the overlay, then runs one assistant exchange.

mod overlay;
mod settings;
mod tour;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use glam::Vec2;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use showroom_core::FrameClock;
use showroom_integration::{AssistantClient, AssistantSession};
use showroom_rig::{FrameInput, PathCamera};

use crate::overlay::Overlay;
use crate::settings::AppSettings;

/// Length of the scripted flight
const FLIGHT_FRAMES: u32 = 900;
/// Simulated render cadence (60 Hz)
const FRAME_DELTA: f32 = 1.0 / 60.0;
/// Scroll progress where the vehicle starts its half revolution
const SPIN_START: f32 = 0.55;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Showroom...");

    let settings = AppSettings::load_or_init();
    let path = tour::showcase_path();

    let mut camera = PathCamera::with_config(&path, settings.camera.clone())?;
    let overlay = Rc::new(RefCell::new(Overlay::new(path)));
    let panel = Rc::clone(&overlay);
    camera.set_step_callback(move |step| {
        let mut panel = panel.borrow_mut();
        if panel.set_step(step) {
            println!("\n{}", panel.render());
        }
    });

    // Opening panel before any scrolling
    println!("{}", overlay.borrow().render());

    let mut clock = FrameClock::default();
    for frame in 0..FLIGHT_FRAMES {
        let delta = clock.tick(FRAME_DELTA);
        let progress = frame as f32 / (FLIGHT_FRAMES - 1) as f32;
        let input = FrameInput {
            scroll: Some(progress),
            pointer: pointer_drift(progress),
            vehicle_yaw: Some(vehicle_yaw(progress)),
            free_look: progress > 0.92,
        };
        camera.update(&input, delta);
    }

    let pose = camera.pose();
    info!(
        position = ?pose.position,
        target = ?pose.target,
        seconds = clock.total_seconds(),
        "flight complete"
    );

    // One assistant exchange; without a credential this degrades to the
    // offline notice instead of failing.
    let client = AssistantClient::new()?;
    let mut session = AssistantSession::new(tour::ASSISTANT_PERSONA);
    if let Some(model) = settings.assistant.model.clone() {
        session = session.with_model(model);
    }

    println!("\n{}", tour::WELCOME_MESSAGE);
    let question = "What makes the braking system special?";
    println!("> {question}");
    println!("{}", session.send(question, &client));

    Ok(())
}

/// Vehicle spin over the flight: still through the close-ups, then a half
/// revolution across the orbit leg.
fn vehicle_yaw(progress: f32) -> f32 {
    if progress <= SPIN_START {
        return 0.0;
    }
    (progress - SPIN_START) / (1.0 - SPIN_START) * std::f32::consts::PI
}

/// Gentle pointer sweep, consumed once free look engages near the hero shot
fn pointer_drift(progress: f32) -> Vec2 {
    let phase = progress * std::f32::consts::TAU * 2.0;
    Vec2::new(phase.sin() * 0.6, phase.cos() * 0.3)
}
