use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::api::types::{Anchor, PointerState, Trigger, Viewport};
use crate::core::intensity::Intensity;
use crate::core::scheduler::{FrameScheduler, FrameToken};
use crate::core::time::FixedTimestep;
use crate::input::queue::TriggerQueue;
use crate::renderer::draw_list::DrawList;
use crate::systems::anchors::AnchorSet;
use crate::systems::attractors::AttractorRegistry;
use crate::systems::connections::ConnectionGraph;
use crate::systems::effects::{EffectRegistry, Rng, CLICK_STAR};
use crate::systems::particles::ParticlePool;

const TARGET_ENTER: f32 = 1.0;
const TARGET_LEAVE: f32 = 0.2;
const TARGET_HOVER: f32 = 1.5;
const CLICK_SPIKE: f32 = 2.0;
const FILTER_SPIKE: f32 = 2.5;
const FILTER_SCATTER_RINGS: usize = 15;
const OVERLAY_ALPHA: f32 = 0.4;

/// Something that can report where the anchors are right now.
/// The web host walks the DOM; tests and native hosts hand over a fixed list.
pub trait AnchorSource {
    fn snapshot(&mut self) -> Vec<Anchor>;
}

/// A fixed anchor list.
#[derive(Debug, Clone, Default)]
pub struct StaticAnchors(pub Vec<Anchor>);

impl AnchorSource for StaticAnchors {
    fn snapshot(&mut self) -> Vec<Anchor> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Owns every simulation component and drives them once per scheduled frame.
///
/// Lifecycle: `start` requests a frame, each `on_frame` runs the fixed ticks
/// the elapsed time allows, records a fresh draw list and requests the next
/// frame. `stop` cancels the outstanding request but keeps all state;
/// `destroy` stops for good and releases everything.
pub struct RenderLoop<S: FrameScheduler> {
    config: FieldConfig,
    scheduler: S,
    state: LoopState,
    pending: Option<FrameToken>,
    destroyed: bool,

    viewport: Viewport,
    timestep: FixedTimestep,
    tick: u64,
    rng: Rng,
    pointer: PointerState,
    pointer_moved: bool,
    triggers: TriggerQueue,
    pending_anchors: Option<Vec<Anchor>>,
    rescan_requested: bool,
    anchor_source: Option<Box<dyn AnchorSource>>,

    anchors: AnchorSet,
    attractors: AttractorRegistry,
    particles: ParticlePool,
    connections: ConnectionGraph,
    effects: EffectRegistry,
    intensity: Intensity,

    draw_list: DrawList,
    frames_drawn: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(config: FieldConfig, viewport: Viewport, scheduler: S) -> Self {
        let config = config.validated();
        let mut rng = Rng::new(config.seed);
        let capacity = config.capacity_for_width(viewport.width);
        let particles = ParticlePool::new(capacity, config.particles.clone(), viewport.size(), &mut rng);
        let l = &config.frame_loop;
        let timestep = FixedTimestep::new(l.fixed_dt);
        let intensity = Intensity::new(l.idle_intensity, l.intensity_easing, l.max_intensity);
        log::info!(
            "field ready: {}x{} @{}x, {} particles",
            viewport.width, viewport.height, viewport.pixel_ratio, capacity
        );

        Self {
            scheduler,
            state: LoopState::Stopped,
            pending: None,
            destroyed: false,
            viewport,
            timestep,
            tick: 0,
            rng,
            pointer: PointerState::default(),
            pointer_moved: false,
            triggers: TriggerQueue::new(),
            pending_anchors: None,
            rescan_requested: true,
            anchor_source: None,
            anchors: AnchorSet::new(),
            attractors: AttractorRegistry::new(config.attractors.clone()),
            particles,
            connections: ConnectionGraph::new(config.connections.clone()),
            effects: EffectRegistry::new(config.effects.clone(), config.seed),
            intensity,
            draw_list: DrawList::with_capacity(capacity + 256),
            frames_drawn: 0,
            config,
        }
    }

    pub fn with_anchor_source(mut self, source: Box<dyn AnchorSource>) -> Self {
        self.set_anchor_source(source);
        self
    }

    /// Install the source polled every refresh interval and after filter changes.
    pub fn set_anchor_source(&mut self, source: Box<dyn AnchorSource>) {
        self.anchor_source = Some(source);
        self.rescan_requested = true;
    }

    // -- Lifecycle --

    pub fn start(&mut self) {
        if self.destroyed {
            log::warn!("start() after destroy() ignored");
            return;
        }
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.timestep.reset();
        self.pending = Some(self.scheduler.request_frame());
        log::debug!("render loop started");
    }

    /// Cancel the pending frame and drop queued triggers; simulation state is kept.
    pub fn stop(&mut self) {
        if self.state != LoopState::Running {
            return;
        }
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        self.triggers.clear();
        self.state = LoopState::Stopped;
        log::debug!("render loop stopped at tick {}", self.tick);
    }

    /// Stop and release all simulation state. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop();
        self.destroyed = true;
        self.anchor_source = None;
        self.pending_anchors = None;
        self.triggers.clear();
        self.anchors.clear();
        self.connections.clear();
        self.effects.clear();
        self.draw_list.clear();
        self.intensity.reset();
        log::info!("field destroyed after {} frames", self.frames_drawn);
    }

    /// Scheduler callback. Runs the due ticks, records the frame and asks for
    /// the next one. Returns false when the loop is not running (late callback
    /// after stop or destroy), in which case nothing is drawn.
    pub fn on_frame(&mut self, frame_dt: f32) -> bool {
        if self.destroyed || self.state != LoopState::Running {
            return false;
        }
        // Normally already fired; cancelling keeps exactly one chain alive
        // if the host calls in before it does.
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.step();
        }
        self.draw();
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    // -- Simulation --

    /// One fixed tick.
    pub fn step(&mut self) {
        if self.destroyed {
            return;
        }
        self.tick += 1;
        self.refresh_anchors();

        for trigger in self.triggers.drain() {
            self.apply_trigger(trigger);
        }
        self.intensity.step();

        let hover_margin = self.config.frame_loop.hover_margin;
        for index in self.anchors.update(&self.pointer, hover_margin) {
            if let Some(state) = self.anchors.get(index) {
                let center = state.position();
                log::debug!("anchor {:?} hovered", state.id());
                self.effects.spawn_shockwave(center);
                self.effects.spawn_pulse_wave(center);
                self.effects.spawn_vortex(center);
            }
        }
        if std::mem::take(&mut self.pointer_moved) {
            self.react_to_pointer_move();
        }

        let attractors = self.attractors.rebuild(self.anchors.states(), &self.pointer);
        self.particles.step(attractors, &mut self.rng);
        self.connections.step(self.anchors.states());
        self.effects.step();
    }

    fn refresh_anchors(&mut self) {
        let snapshot = match self.pending_anchors.take() {
            Some(anchors) => Some(anchors),
            None => {
                let due = self.rescan_requested
                    || self.tick % self.config.frame_loop.anchor_refresh_interval == 0;
                match self.anchor_source.as_mut() {
                    Some(source) if due => Some(source.snapshot()),
                    _ => None,
                }
            }
        };
        self.rescan_requested = false;
        if let Some(anchors) = snapshot {
            self.anchors.replace(anchors, &mut self.rng);
            self.connections.rebuild(self.anchors.states(), &mut self.rng);
        }
    }

    fn apply_trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::PointerMove(raw) => {
                // Document-wide moves arrive from outside the surface too.
                let inside = self.viewport.contains(raw);
                let p = self.viewport.clamp(raw);
                self.pointer.position = p;
                self.pointer.active = inside;
                if inside {
                    self.pointer_moved = true;
                    self.effects.push_trail(p);
                }
            }
            Trigger::PointerEnter => {
                self.pointer.active = true;
                self.intensity.set_target(TARGET_ENTER);
            }
            Trigger::PointerLeave => {
                self.pointer.active = false;
                self.intensity.set_target(TARGET_LEAVE);
            }
            Trigger::Click(p) => {
                let p = self.viewport.clamp(p);
                self.effects.spawn_explosion(p);
                for _ in 0..self.config.particles.click_spawn {
                    self.particles.spawn_at(p, &mut self.rng);
                }
                if let Some(index) = self.anchors.hovered() {
                    self.anchor_clicked(index);
                }
            }
            Trigger::HoverEnter(id) => {
                if !self.anchors.force_active(id) {
                    log::debug!("hover on unknown anchor {:?}", id);
                }
            }
            Trigger::FilterChanged => {
                self.effects.spawn_scatter(self.viewport.size(), FILTER_SCATTER_RINGS);
                self.intensity.spike(FILTER_SPIKE);
                self.rescan_requested = true;
            }
        }
    }

    fn anchor_clicked(&mut self, index: usize) {
        let Some(center) = self.anchors.get(index).map(|s| s.position()) else {
            return;
        };
        self.effects.spawn_star(center, &CLICK_STAR);
        for other in self.connections.neighbors(index) {
            if let Some(target) = self.anchors.get(other) {
                self.effects.spawn_arc(center, target.position());
            }
        }
        self.intensity.spike(CLICK_SPIKE);
    }

    /// Retarget intensity and roll for lightning toward nearby anchors.
    fn react_to_pointer_move(&mut self) {
        let target = if self.anchors.hovered().is_some() { TARGET_HOVER } else { TARGET_ENTER };
        self.intensity.set_target(target);

        let origin = self.pointer.position;
        let range = self.config.effects.lightning_range;
        let chance = self.config.effects.lightning_chance;
        for state in self.anchors.states() {
            let end = state.position();
            if origin.distance(end) < range && self.rng.chance(chance) {
                self.effects.spawn_lightning(origin, end);
            }
        }
    }

    // -- Drawing --

    /// Record the current frame: particles, links, anchor halos, effects, overlay.
    pub fn draw(&mut self) {
        self.draw_list.clear();
        if self.destroyed {
            return;
        }
        let intensity = self.intensity.current();
        self.draw_list.clear_surface(self.viewport.size());
        self.particles.draw(&mut self.draw_list, intensity);
        self.connections.draw(self.anchors.states(), &mut self.draw_list, intensity);
        self.anchors.draw(&mut self.draw_list, intensity);
        self.effects.draw_all(&mut self.draw_list, intensity);
        if self.config.frame_loop.overlay {
            let at = Vec2::new(20.0, self.viewport.height - 15.0);
            self.draw_list.overlay(at, OVERLAY_ALPHA, (intensity * 100.0).round());
        }
        self.frames_drawn += 1;
    }

    // -- Host hooks --

    /// New surface size. Simulation state is kept.
    pub fn on_resize(&mut self, viewport: Viewport) {
        log::debug!("resize to {}x{} @{}x", viewport.width, viewport.height, viewport.pixel_ratio);
        self.viewport = viewport;
        self.particles.resize(viewport.size());
    }

    /// Replace the anchor snapshot at the start of the next tick.
    pub fn on_anchors_changed(&mut self, anchors: Vec<Anchor>) {
        self.pending_anchors = Some(anchors);
    }

    /// Queue a trigger for the next tick. While stopped only the latest
    /// pointer state is kept; clicks, hovers and filter changes are dropped.
    pub fn on_trigger(&mut self, trigger: Trigger) {
        if self.destroyed {
            return;
        }
        match (self.state, trigger) {
            (LoopState::Running, _) => self.triggers.push(trigger),
            (
                LoopState::Stopped,
                Trigger::PointerMove(_) | Trigger::PointerEnter | Trigger::PointerLeave,
            ) => self.triggers.push_latest(trigger),
            (LoopState::Stopped, _) => log::trace!("dropping {:?} while stopped", trigger),
        }
    }

    pub fn set_target_intensity(&mut self, target: f32) {
        self.intensity.set_target(target);
    }

    // -- Accessors --

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn intensity(&self) -> f32 {
        self.intensity.current()
    }

    pub fn target_intensity(&self) -> f32 {
        self.intensity.target()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn connections(&self) -> &ConnectionGraph {
        &self.connections
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pending_triggers(&self) -> usize {
        self.triggers.len()
    }

    pub fn attractors(&self) -> &AttractorRegistry {
        &self.attractors
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::ManualScheduler;
    use crate::renderer::draw_list::DrawKind;
    use crate::systems::effects::{EffectFamily, VORTEX_MARKERS};
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: f32 = 1.0 / 60.0;

    /// A running field; tests drive ticks directly with `step`.
    fn field() -> RenderLoop<ManualScheduler> {
        let config = FieldConfig { seed: 42, ..FieldConfig::default() };
        let mut f = RenderLoop::new(config, Viewport::new(1200.0, 800.0, 1.0), ManualScheduler::new());
        f.start();
        f
    }

    fn card(id: u32, x: f32, y: f32, category: &str) -> Anchor {
        Anchor::new(id, Vec2::new(x, y), Vec2::new(100.0, 60.0), category)
    }

    struct CountingSource {
        calls: Rc<Cell<usize>>,
        anchors: Vec<Anchor>,
    }

    impl AnchorSource for CountingSource {
        fn snapshot(&mut self) -> Vec<Anchor> {
            self.calls.set(self.calls.get() + 1);
            self.anchors.clone()
        }
    }

    #[test]
    fn intensity_reaches_target_within_fifty_ticks() {
        let mut f = field();
        f.set_target_intensity(1.0);
        f.step();
        assert!((f.intensity() - 0.1).abs() < 1e-5);
        for _ in 1..50 {
            f.step();
        }
        assert!((f.intensity() - 1.0).abs() < 0.01);
    }

    #[test]
    fn start_requests_one_frame_and_frames_chain() {
        let mut f = field();
        f.start();
        f.start();
        assert_eq!(f.scheduler().pending(), 1);
        for _ in 0..5 {
            assert!(f.scheduler_mut().fire().is_some());
            assert!(f.on_frame(FRAME));
            assert_eq!(f.scheduler().pending(), 1);
        }
        assert_eq!(f.frames_drawn(), 5);
        assert_eq!(f.tick_count(), 5);
    }

    #[test]
    fn stop_cancels_and_start_resumes_with_state() {
        let mut f = field();
        f.scheduler_mut().fire();
        f.on_frame(FRAME);
        f.stop();
        assert_eq!(f.scheduler().pending(), 0);
        assert!(!f.on_frame(FRAME));

        let before: Vec<Vec2> = f.particles().particles().iter().map(|p| p.position).collect();
        f.start();
        let after: Vec<Vec2> = f.particles().particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert!(f.is_running());
        assert_eq!(f.scheduler().pending(), 1);
    }

    #[test]
    fn early_frame_callback_keeps_a_single_chain() {
        let mut f = field();
        // Host calls in while the first request is still queued.
        assert!(f.on_frame(FRAME));
        assert_eq!(f.scheduler().pending(), 1);
        f.stop();
        f.start();
        assert_eq!(f.scheduler().pending(), 1);
    }

    #[test]
    fn destroy_is_idempotent_and_silences_drawing() {
        let mut f = field();
        f.scheduler_mut().fire();
        f.on_frame(FRAME);
        assert!(!f.draw_list().is_empty());

        f.destroy();
        f.destroy();
        assert!(f.is_destroyed());
        assert_eq!(f.scheduler().pending(), 0);
        assert!(f.draw_list().is_empty());

        let drawn = f.frames_drawn();
        assert!(!f.on_frame(FRAME));
        f.start();
        assert!(!f.is_running());
        f.draw();
        assert!(f.draw_list().is_empty());
        assert_eq!(f.frames_drawn(), drawn);
    }

    #[test]
    fn pool_size_is_constant_across_frames() {
        let mut f = field().with_anchor_source(Box::new(StaticAnchors(vec![
            card(1, 300.0, 300.0, "web"),
            card(2, 700.0, 300.0, "web"),
        ])));
        let capacity = f.particles().capacity();
        f.start();
        for i in 0..120 {
            if i % 10 == 0 {
                f.on_trigger(Trigger::Click(Vec2::new(300.0, 300.0)));
            }
            f.on_trigger(Trigger::PointerMove(Vec2::new(i as f32 * 5.0, 300.0)));
            f.on_frame(FRAME);
            assert_eq!(f.particles().particles().len(), capacity);
        }
    }

    #[test]
    fn narrow_viewport_uses_smaller_pool() {
        let config = FieldConfig::default();
        let f = RenderLoop::new(config, Viewport::new(500.0, 800.0, 2.0), ManualScheduler::new());
        assert_eq!(f.particles().capacity(), 50);
    }

    #[test]
    fn anchor_source_is_polled_on_interval() {
        let calls = Rc::new(Cell::new(0));
        let source = CountingSource {
            calls: calls.clone(),
            anchors: vec![card(1, 100.0, 100.0, "web")],
        };
        let mut f = field().with_anchor_source(Box::new(source));
        f.step();
        assert_eq!(calls.get(), 1);
        assert_eq!(f.anchors().len(), 1);
        for _ in 1..20 {
            f.step();
        }
        assert_eq!(calls.get(), 2);
        for _ in 0..20 {
            f.step();
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn filter_change_flashes_and_rescans() {
        let calls = Rc::new(Cell::new(0));
        let source = CountingSource {
            calls: calls.clone(),
            anchors: vec![card(1, 100.0, 100.0, "web")],
        };
        let mut f = field().with_anchor_source(Box::new(source));
        f.step();
        assert_eq!(calls.get(), 1);

        f.on_trigger(Trigger::FilterChanged);
        f.step();
        assert!(f.intensity() > 2.0);
        assert!(f.effects().count(EffectFamily::Ring) >= 15);
        assert_eq!(calls.get(), 1);

        f.step();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn hovering_an_anchor_fires_entry_effects_once() {
        let mut f = field();
        f.on_anchors_changed(vec![card(1, 400.0, 400.0, "web")]);
        f.on_trigger(Trigger::PointerMove(Vec2::new(400.0, 400.0)));
        f.step();
        assert_eq!(f.anchors().hovered(), Some(0));
        assert_eq!(f.effects().count(EffectFamily::Vortex), VORTEX_MARKERS);
        assert_eq!(f.target_intensity(), TARGET_HOVER);

        let rings = f.effects().count(EffectFamily::Ring);
        f.on_trigger(Trigger::PointerMove(Vec2::new(401.0, 400.0)));
        f.step();
        assert!(f.effects().count(EffectFamily::Ring) <= rings);
    }

    #[test]
    fn clicking_a_hovered_anchor_arcs_to_neighbors() {
        let mut f = field();
        f.on_anchors_changed(vec![
            card(1, 400.0, 400.0, "web"),
            card(2, 900.0, 400.0, "web"),
            card(3, 100.0, 700.0, "data"),
        ]);
        f.on_trigger(Trigger::HoverEnter(crate::api::types::AnchorId(1)));
        f.step();
        assert_eq!(f.anchors().hovered(), Some(0));

        let bolts = f.effects().count(EffectFamily::Bolt);
        f.on_trigger(Trigger::Click(Vec2::new(400.0, 400.0)));
        f.step();
        assert_eq!(f.effects().count(EffectFamily::Burst), CLICK_STAR.rays);
        assert_eq!(f.effects().count(EffectFamily::Bolt), bolts + 1);
        assert!(f.intensity() > 1.5);
    }

    #[test]
    fn pointer_leave_lowers_target() {
        let mut f = field();
        f.on_trigger(Trigger::PointerEnter);
        f.step();
        assert_eq!(f.target_intensity(), TARGET_ENTER);
        f.on_trigger(Trigger::PointerLeave);
        f.step();
        assert_eq!(f.target_intensity(), TARGET_LEAVE);
        assert!(!f.pointer().active);
    }

    #[test]
    fn pointer_is_clamped_into_viewport() {
        let mut f = field();
        f.on_trigger(Trigger::PointerMove(Vec2::new(-50.0, 5000.0)));
        f.step();
        assert_eq!(f.pointer().position, Vec2::new(0.0, 800.0));
        assert!(!f.pointer().active);
    }

    #[test]
    fn moves_outside_the_surface_release_the_pointer() {
        let mut f = field();
        f.on_trigger(Trigger::PointerMove(Vec2::new(600.0, 400.0)));
        f.step();
        assert!(f.pointer().active);
        assert_eq!(f.attractors().attractors().len(), 1);

        let trails = f.effects().count(EffectFamily::Trail);
        f.on_trigger(Trigger::PointerLeave);
        f.on_trigger(Trigger::PointerMove(Vec2::new(-300.0, 400.0)));
        f.step();
        assert!(!f.pointer().active);
        assert!(f.attractors().attractors().is_empty());
        assert!(f.effects().count(EffectFamily::Trail) <= trails);
    }

    #[test]
    fn ui_hover_clears_once_pointer_is_elsewhere() {
        let mut f = field();
        f.on_anchors_changed(vec![card(1, 400.0, 400.0, "web")]);
        f.on_trigger(Trigger::HoverEnter(crate::api::types::AnchorId(1)));
        f.step();
        assert_eq!(f.anchors().hovered(), Some(0));

        f.on_trigger(Trigger::PointerMove(Vec2::new(1100.0, 50.0)));
        for _ in 0..5 {
            f.step();
        }
        assert_eq!(f.anchors().hovered(), None);
    }

    #[test]
    fn stopped_field_keeps_only_latest_pointer_state() {
        let mut f = field();
        f.stop();
        for i in 0..100 {
            f.on_trigger(Trigger::Click(Vec2::new(i as f32, 10.0)));
            f.on_trigger(Trigger::PointerMove(Vec2::new(i as f32, 20.0)));
            f.on_trigger(Trigger::PointerEnter);
        }
        f.on_trigger(Trigger::FilterChanged);
        assert!(f.pending_triggers() <= 3);

        f.start();
        f.step();
        assert_eq!(f.effects().count(EffectFamily::Ring), 0);
        assert_eq!(f.effects().count(EffectFamily::Burst), 0);
        assert_eq!(f.pointer().position, Vec2::new(99.0, 20.0));
    }

    #[test]
    fn stop_drops_queued_triggers() {
        let mut f = field();
        f.on_trigger(Trigger::Click(Vec2::new(300.0, 300.0)));
        assert_eq!(f.pending_triggers(), 1);
        f.stop();
        assert_eq!(f.pending_triggers(), 0);
    }

    #[test]
    fn resize_keeps_particles() {
        let mut f = field();
        f.step();
        let before = f.particles().particles().len();
        f.on_resize(Viewport::new(400.0, 300.0, 2.0));
        assert_eq!(f.particles().particles().len(), before);
        assert_eq!(f.particles().bounds(), Vec2::new(400.0, 300.0));
        f.step();
        f.draw();
        assert_eq!(f.draw_list().commands()[0].kind(), Some(DrawKind::Clear));
    }

    #[test]
    fn empty_field_draws_particles_and_overlay() {
        let mut f = field();
        f.set_target_intensity(1.0);
        for _ in 0..30 {
            f.step();
        }
        f.draw();
        let list = f.draw_list();
        assert_eq!(list.count(DrawKind::Overlay), 1);
        assert!(list.count(DrawKind::FillCircle) > 0);
        assert_eq!(list.count(DrawKind::Line), 0);
    }
}
