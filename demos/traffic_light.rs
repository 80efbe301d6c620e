//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - A single behavior driven by timer ticks
//! - Rejected transitions leave the light untouched
//! - Rendering the declared graph as a diagram
//!
//! Run with: cargo run --example traffic_light

use switchyard::diagram::{render, DiagramFormat};
use switchyard::{state_enum, StateAction, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

enum Tick {
    Next,
    Emergency,
}

/// Counts full red-to-red cycles.
#[derive(Default)]
struct Cycles(u32);

struct Lamp {
    light: TrafficLight,
}

impl StateAction<TrafficLight, Cycles, Tick> for Lamp {
    fn on_enter(&mut self, cycles: &mut Cycles) {
        if self.light == TrafficLight::Red {
            cycles.0 += 1;
        }
        println!("  light is now {:?}", self.light);
    }

    fn on_exit(&mut self, _cycles: &mut Cycles) {}

    fn execute(&mut self, _cycles: &mut Cycles, tick: Tick) -> TrafficLight {
        match (tick, self.light) {
            (Tick::Emergency, _) => TrafficLight::Red,
            (Tick::Next, TrafficLight::Red) => TrafficLight::Green,
            (Tick::Next, TrafficLight::Green) => TrafficLight::Yellow,
            (Tick::Next, TrafficLight::Yellow) => TrafficLight::Red,
        }
    }
}

fn lamp(light: TrafficLight) -> Lamp {
    Lamp { light }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::<TrafficLight, Cycles, Tick>::new()
        .name("traffic_light")
        .default_state(TrafficLight::Red)
        .register_state(TrafficLight::Red, lamp(TrafficLight::Red), [TrafficLight::Green])?
        .register_state(TrafficLight::Green, lamp(TrafficLight::Green), [TrafficLight::Yellow])?
        .register_state(TrafficLight::Yellow, lamp(TrafficLight::Yellow), [TrafficLight::Red])?
        .build()?;

    machine.start();
    for _ in 0..6 {
        machine.process_event(Tick::Next)?;
    }

    println!("\nEmergency while green:");
    machine.process_event(Tick::Next)?;
    if let Err(err) = machine.process_event(Tick::Emergency) {
        println!("  rejected: {err}");
    }

    println!("\nCycles completed: {}", machine.context().0);

    let format = DiagramFormat::PlantUml;
    println!("\n{}:\n{}", format.file_name(machine.name()), render(&machine, format));

    machine.stop();
    println!("=== Example Complete ===");
    Ok(())
}
