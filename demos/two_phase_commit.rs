//! Two-Phase Commit Coordinator
//!
//! This example drives the coordinator side of a two-phase commit.
//!
//! Key concepts:
//! - One behavior per state, sharing a coordinator context
//! - Behaviors with their own counters (vote tallies)
//! - One behavior type reused for two states (Commit and Abort)
//! - Typed events instead of downcasting
//!
//! Run with: cargo run --example two_phase_commit (RUST_LOG=debug for engine logs)

use switchyard::{state_enum, StateAction, StateMachineBuilder};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

state_enum! {
    enum Phase {
        Init,
        Wait,
        Abort,
        Commit,
    }
}

struct Coordinator {
    commit_id: Option<Uuid>,
    participants: usize,
}

enum Message {
    CommitRequest { commit_id: Uuid },
    Vote { commit: bool },
}

// ========= Init =========

struct InitState;

impl StateAction<Phase, Coordinator, Message> for InitState {
    fn on_enter(&mut self, ctx: &mut Coordinator) {
        ctx.commit_id = None;
    }

    fn on_exit(&mut self, _ctx: &mut Coordinator) {}

    fn execute(&mut self, ctx: &mut Coordinator, msg: Message) -> Phase {
        let Message::CommitRequest { commit_id } = msg else {
            tracing::warn!("invalid request, staying in Init");
            return Phase::Init;
        };

        tracing::info!(%commit_id, "got commit request, asking participants to vote");
        ctx.commit_id = Some(commit_id);
        Phase::Wait
    }
}

// ========= Wait =========

struct WaitState {
    votes: usize,
}

impl StateAction<Phase, Coordinator, Message> for WaitState {
    fn on_enter(&mut self, _ctx: &mut Coordinator) {
        self.votes = 0;
    }

    fn on_exit(&mut self, _ctx: &mut Coordinator) {}

    fn execute(&mut self, ctx: &mut Coordinator, msg: Message) -> Phase {
        match msg {
            Message::Vote { commit: true } => {
                self.votes += 1;
                tracing::info!(votes = self.votes, "commit confirmation received");
                if self.votes == ctx.participants {
                    Phase::Commit
                } else {
                    Phase::Wait
                }
            }
            _ => {
                tracing::warn!(commit_id = ?ctx.commit_id, "vote rejected, aborting");
                Phase::Abort
            }
        }
    }
}

// ========= Commit / Abort =========

struct ResponseState {
    outstanding: usize,
    phase: Phase,
}

impl StateAction<Phase, Coordinator, Message> for ResponseState {
    fn on_enter(&mut self, ctx: &mut Coordinator) {
        self.outstanding = ctx.participants;
        tracing::info!(phase = ?self.phase, commit_id = ?ctx.commit_id, "broadcasting decision");
    }

    fn on_exit(&mut self, _ctx: &mut Coordinator) {}

    fn execute(&mut self, _ctx: &mut Coordinator, msg: Message) -> Phase {
        match msg {
            Message::Vote { commit: true } => {
                self.outstanding -= 1;
                if self.outstanding == 0 {
                    Phase::Init
                } else {
                    self.phase
                }
            }
            // participant has to be sent the decision again
            _ => self.phase,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sm = StateMachineBuilder::<Phase, Coordinator, Message>::with_context(Coordinator {
        commit_id: None,
        participants: 3,
    })
    .name("two_phase_commit")
    .default_state(Phase::Init)
    .register_state(Phase::Init, InitState, [Phase::Wait])?
    .register_state(Phase::Wait, WaitState { votes: 0 }, [Phase::Abort, Phase::Commit])?
    .register_state(
        Phase::Abort,
        ResponseState {
            outstanding: 0,
            phase: Phase::Abort,
        },
        [Phase::Init],
    )?
    .register_state(
        Phase::Commit,
        ResponseState {
            outstanding: 0,
            phase: Phase::Commit,
        },
        [Phase::Init],
    )?
    .build()?;

    println!("=== Two-Phase Commit Coordinator ===\n");

    sm.start();
    println!("State (pre commit request): {:?}", sm.state());

    sm.process_event(Message::CommitRequest {
        commit_id: Uuid::new_v4(),
    })?;
    println!("State (post commit request): {:?}", sm.state());

    for _ in 0..3 {
        sm.process_event(Message::Vote { commit: true })?;
        println!("State (voting): {:?}", sm.state());
    }

    for _ in 0..3 {
        sm.process_event(Message::Vote { commit: true })?;
        println!("State (confirming): {:?}", sm.state());
    }

    sm.stop();
    println!("\n=== Example Complete ===");
    Ok(())
}
