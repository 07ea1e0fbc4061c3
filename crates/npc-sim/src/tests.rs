//! Scenario tests for npc-sim — whole-loop behavior through the public API.

use npc_core::{Tick, Vec3};
use npc_critter::{CritterConfig, CritterMachine, CritterState};
use npc_dog::{DogBehavior, DogConfig};
use npc_world::{AnimSink, ObjectSpec, SceneWorld, Tag, WorldQuery, WorldWriter};

use crate::{Agent, NoopObserver, Sim, SimBuilder, SimError, SimObserver};

fn dog_params(agent: &Agent) -> (bool, bool) {
    (
        agent.anim.get_bool(npc_dog::params::IS_WALKING),
        agent.anim.get_bool(npc_dog::params::IS_SITTING),
    )
}

fn dog_active(sim: &Sim<SceneWorld>, body: npc_core::ObjectId) -> DogBehavior {
    sim.agent_for(body)
        .and_then(Agent::as_dog)
        .map(|d| d.active())
        .unwrap()
}

fn critter_state(sim: &Sim<SceneWorld>, body: npc_core::ObjectId) -> CritterState {
    sim.agent_for(body)
        .and_then(Agent::as_critter)
        .map(CritterMachine::state)
        .unwrap()
}

// ── Dog scenarios ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod dog {
    use super::*;

    #[test]
    fn roam_far_follow_near_sit_close() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::new(20.0, 0.0, 0.0)));
        let dog = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let mut sim = SimBuilder::new(world, 42)
            .dog(dog, player, DogConfig::default())
            .build()
            .unwrap();

        // Distance 20 with switch distance 10: roaming, walk flag forced on.
        sim.step();
        assert_eq!(dog_active(&sim, dog), DogBehavior::RandomWalk);
        let (walking, sitting) = dog_params(sim.agent_for(dog).unwrap());
        assert!(walking && !sitting);

        // Player approaches to 5: follow engages within one tick, not seated.
        let dog_pos = sim.world.position(dog);
        sim.world
            .set_position(player, dog_pos + Vec3::new(5.0, 0.0, 0.0));
        sim.step();
        assert_eq!(dog_active(&sim, dog), DogBehavior::Follow);
        let (_, sitting) = dog_params(sim.agent_for(dog).unwrap());
        assert!(!sitting);

        // The dog closes to stop distance and settles into a sit.
        sim.run_secs(4.0, &mut NoopObserver);
        assert_eq!(dog_active(&sim, dog), DogBehavior::Follow);
        let (walking, sitting) = dog_params(sim.agent_for(dog).unwrap());
        assert!(sitting && !walking);
        let dist = sim
            .world
            .position(dog)
            .distance(sim.world.position(player));
        assert!(dist <= 2.0, "dog should be parked near the player, at {dist}");
    }

    #[test]
    fn fetch_end_to_end_then_drop_on_roam() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::new(3.0, 0.0, 0.0)));
        let dog = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let mut sim = SimBuilder::new(world, 42)
            .dog(dog, player, DogConfig::default())
            .build()
            .unwrap();

        // Settle next to the player and open the fetch cooldown window.
        sim.run_secs(1.2, &mut NoopObserver);

        // A ball appears and gets baselined on the next detection poll.
        let ball = sim
            .world
            .spawn(ObjectSpec::prop(Vec3::new(0.0, 0.0, 5.0)).with_tag(Tag::Fetch));
        sim.run_secs(0.2, &mut NoopObserver);
        assert_eq!(dog_active(&sim, dog), DogBehavior::Follow);

        // The throw lands: displaced from baseline, at rest.
        sim.world.set_position(ball, Vec3::new(0.0, 0.0, 8.0));
        sim.step();
        assert_eq!(dog_active(&sim, dog), DogBehavior::Fetch);

        // The dog reaches the ball and carries it back toward the player.
        sim.run_secs(5.0, &mut NoopObserver);
        assert_eq!(sim.world.parent(ball), Some(dog));
        assert!(sim.world.is_kinematic(ball));
        assert_eq!(dog_active(&sim, dog), DogBehavior::Follow);

        // The player leaves; switching to roam drops the carried ball.
        sim.world.set_position(player, Vec3::new(100.0, 0.0, 0.0));
        sim.step();
        assert_eq!(dog_active(&sim, dog), DogBehavior::RandomWalk);
        assert_eq!(sim.world.parent(ball), None);
        assert!(!sim.world.is_kinematic(ball));
        assert!(sim.world.linear_velocity(ball).y > 0.0);
    }
}

// ── Critter scenarios ─────────────────────────────────────────────────────────

#[cfg(test)]
mod critter {
    use super::*;

    #[test]
    fn flees_until_clear_then_roams_again() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::new(0.0, 0.0, 10.0)));
        let hen = world.spawn(ObjectSpec::creature(Vec3::ZERO).with_tag(Tag::Flock));
        let mut sim = SimBuilder::new(world, 7)
            .critter(hen, player, CritterConfig::default())
            .build()
            .unwrap();

        sim.run_secs(0.5, &mut NoopObserver);
        assert!(matches!(critter_state(&sim, hen), CritterState::Roaming(_)));

        // Player closes in; the critter flees.
        let hen_pos = sim.world.position(hen);
        sim.world
            .set_position(player, hen_pos + Vec3::new(0.0, 0.0, 2.0));
        sim.step();
        assert_eq!(critter_state(&sim, hen), CritterState::Escaping);

        // With the player stationary, the flee clears the hysteresis radius
        // and roaming resumes.  (Roam legs may later wander back into range,
        // so sample the first post-escape tick rather than a fixed instant.)
        let mut resumed = false;
        for _ in 0..200 {
            sim.step();
            if matches!(critter_state(&sim, hen), CritterState::Roaming(_)) {
                resumed = true;
                break;
            }
        }
        assert!(resumed, "escape never ended");
        let dist = sim
            .world
            .position(hen)
            .distance(sim.world.position(player));
        assert!(dist > 7.0, "critter should be well clear, at {dist}");
    }

    #[test]
    fn dog_and_critters_share_one_world() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::new(5.0, 0.0, 0.0)));
        let dog = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let hen_a = world.spawn(ObjectSpec::creature(Vec3::new(-4.0, 0.0, 4.0)).with_tag(Tag::Flock));
        let hen_b = world.spawn(ObjectSpec::creature(Vec3::new(4.0, 0.0, -4.0)).with_tag(Tag::Flock));
        let mut sim = SimBuilder::new(world, 99)
            .dog(dog, player, DogConfig::default())
            .critter(hen_a, player, CritterConfig::default())
            .critter(hen_b, player, CritterConfig::default())
            .build()
            .unwrap();

        sim.run_secs(10.0, &mut NoopObserver);

        // Every agent still drives exactly one behavior.
        assert!(sim.agent_for(dog).unwrap().as_dog().is_some());
        for hen in [hen_a, hen_b] {
            assert!(sim.agent_for(hen).unwrap().as_critter().is_some());
            assert!(sim.world.is_alive(hen));
        }
        assert_eq!(sim.clock.current_tick, Tick(500));
    }
}

// ── Harness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod harness {
    use super::*;

    #[test]
    fn builder_rejects_a_dead_body() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let dog = world.spawn(ObjectSpec::creature(Vec3::X));
        world.despawn(dog);
        let err = SimBuilder::new(world, 0)
            .dog(dog, player, DogConfig::default())
            .build();
        assert!(matches!(err, Err(SimError::MissingBody(b)) if b == dog));
    }

    #[test]
    fn builder_rejects_an_invalid_config() {
        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let dog = world.spawn(ObjectSpec::creature(Vec3::X));
        let mut cfg = DogConfig::default();
        cfg.walk.min_move_secs = 9.0; // above max_move_secs
        assert!(matches!(
            SimBuilder::new(world, 0).dog(dog, player, cfg).build(),
            Err(SimError::Npc(_))
        ));
    }

    #[test]
    fn observer_sees_every_tick_boundary() {
        struct Counter {
            started: u64,
            ended: u64,
            last: Option<Tick>,
        }
        impl SimObserver<SceneWorld> for Counter {
            fn on_tick_start(&mut self, _tick: Tick) {
                self.started += 1;
            }
            fn on_tick_end(&mut self, tick: Tick, _world: &SceneWorld, agents: &[Agent]) {
                self.ended += 1;
                assert_eq!(agents.len(), 1);
                self.last = Some(tick);
            }
        }

        let mut world = SceneWorld::new();
        let player = world.spawn(ObjectSpec::creature(Vec3::ZERO));
        let hen = world.spawn(ObjectSpec::creature(Vec3::new(20.0, 0.0, 0.0)));
        let mut sim = SimBuilder::new(world, 1)
            .critter(hen, player, CritterConfig::default())
            .build()
            .unwrap();

        let mut counter = Counter {
            started: 0,
            ended: 0,
            last: None,
        };
        sim.run_ticks(10, &mut counter);
        assert_eq!(counter.started, 10);
        assert_eq!(counter.ended, 10);
        assert_eq!(counter.last, Some(Tick(9)));
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn same_seed_replays_identically() {
        fn build() -> (Sim<SceneWorld>, Vec<npc_core::ObjectId>) {
            let mut world = SceneWorld::new();
            let player = world.spawn(ObjectSpec::creature(Vec3::new(6.0, 0.0, 0.0)));
            let dog = world.spawn(ObjectSpec::creature(Vec3::ZERO));
            let hen = world.spawn(ObjectSpec::creature(Vec3::new(-3.0, 0.0, 3.0)).with_tag(Tag::Flock));
            let sim = SimBuilder::new(world, 1234)
                .dog(dog, player, DogConfig::default())
                .critter(hen, player, CritterConfig::default())
                .build()
                .unwrap();
            (sim, vec![player, dog, hen])
        }

        let (mut a, bodies) = build();
        let (mut b, _) = build();
        a.run_secs(5.0, &mut NoopObserver);
        b.run_secs(5.0, &mut NoopObserver);
        for body in bodies {
            assert_eq!(a.world.position(body), b.world.position(body));
            assert_eq!(a.world.rotation(body), b.world.rotation(body));
        }
    }
}
