//! Reorder controller - the dispatch loop for one reorderable list
//!
//! Every input (pointer event, long-press timer tick, layout change,
//! unmount, Escape) goes through [`ReorderController::handle`] one at a
//! time and runs to completion. The controller owns the layout registry,
//! the long-press trigger, the gesture normalizer and at most one
//! [`DragSession`]. The list itself stays with its [`OrderOwner`], which
//! is only borrowed for the duration of a call.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info, trace, warn};

use super::commit::{self, CommitError, CommitOutcome, OrderOwner};
use super::config::ReorderConfig;
use super::geometry::{Point, Rect};
use super::gesture::{GestureNormalizer, Phase, PointerSample, RawPointer};
use super::long_press::{Armed, LongPressTrigger, PressState};
use super::registry::LayoutRegistry;
use super::session::{DragSession, DragSnapshot, DragStatus};
use super::tracker;

/// One input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderEvent<K> {
    /// Pointer went down on `item`. `pointer` should be `RawPointer::Down`.
    Press { item: K, pointer: RawPointer },
    /// Any pointer event on the list surface after a press.
    Pointer(RawPointer),
    /// Long-press timer fired.
    Tick { now: f64 },
    Layout { item: K, rect: Rect },
    Unmount { item: K },
    /// Keyboard cancel
    Escape,
}

/// What an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<K> {
    /// No state changed.
    Ignored,
    /// Layout registry updated.
    Recorded,
    /// A press started and is waiting to arm.
    Pressed,
    /// A press ended or wandered off before arming; plain tap or scroll.
    Abandoned,
    Armed(DragSnapshot<K>),
    Activated,
    Tracked { target: usize, changed: bool },
    /// Armed drag released before it moved.
    Tapped,
    Committed(Vec<K>),
    /// Released in place with no-op commits disabled.
    CommitSkipped,
    CommitFailed(CommitError),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ReorderController<K> {
    config: ReorderConfig,
    registry: LayoutRegistry<K>,
    trigger: LongPressTrigger<K>,
    gesture: GestureNormalizer,
    session: Option<DragSession<K>>,
}

impl<K> ReorderController<K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(config: ReorderConfig) -> Self {
        Self {
            trigger: LongPressTrigger::from_config(&config),
            registry: LayoutRegistry::new(),
            gesture: GestureNormalizer::new(),
            session: None,
            config,
        }
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn registry(&self) -> &LayoutRegistry<K> {
        &self.registry
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    pub fn snapshot(&self) -> Option<DragSnapshot<K>> {
        self.session.as_ref().map(DragSession::snapshot)
    }

    /// Item currently being pressed but not yet armed
    pub fn pressing(&self) -> Option<&K> {
        match self.trigger.state() {
            PressState::Pressed { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none() && self.trigger.is_idle()
    }

    pub fn handle<O>(&mut self, event: ReorderEvent<K>, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        match event {
            ReorderEvent::Press { item, pointer } => self.press(item, pointer, owner),
            ReorderEvent::Pointer(raw) => self.pointer(raw, owner),
            ReorderEvent::Tick { now } => self.tick(now, owner),
            ReorderEvent::Layout { item, rect } => {
                self.record_layout(item, rect);
                Transition::Recorded
            }
            ReorderEvent::Unmount { item } => self.unmount(&item),
            ReorderEvent::Escape => self.cancel(),
        }
    }

    pub fn record_layout(&mut self, item: K, rect: Rect) {
        self.registry.record(item, rect);
    }

    /// Forget an unmounted item. Unmounting the dragged or pressed item
    /// ends the gesture.
    pub fn unmount(&mut self, item: &K) -> Transition<K> {
        self.registry.forget(item);
        let dragging = self.session.as_ref().is_some_and(|s| s.item() == item);
        let pressing = self.pressing() == Some(item);
        if dragging || pressing {
            debug!(?item, "gesture item unmounted");
            return self.cancel();
        }
        Transition::Recorded
    }

    /// Drop any press or session without touching the list.
    pub fn cancel(&mut self) -> Transition<K> {
        if self.session.is_some() {
            if let Some(mut session) = self.end_session() {
                session.finish(DragStatus::Cancelled);
                info!(item = ?session.item(), "drag cancelled");
            }
            return Transition::Cancelled;
        }
        if self.trigger.is_idle() {
            return Transition::Ignored;
        }
        self.trigger.release();
        self.gesture.reset();
        debug!("press cancelled before arming");
        Transition::Abandoned
    }

    fn press<O>(&mut self, item: K, raw: RawPointer, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        let RawPointer::Down { id, point, at } = raw else {
            trace!(?raw, "press without pointer down");
            return Transition::Ignored;
        };
        if self.session.is_some() || !self.trigger.press(item.clone(), point, at) {
            trace!(?item, id, "press while another gesture is in progress");
            return Transition::Ignored;
        }
        self.gesture.capture(id, point);
        trace!(?item, id, "press");

        match self.trigger.poll(at) {
            Some(armed) => self.arm(armed, owner),
            None => Transition::Pressed,
        }
    }

    fn tick<O>(&mut self, now: f64, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        match self.trigger.poll(now) {
            Some(armed) => self.arm(armed, owner),
            None => Transition::Ignored,
        }
    }

    fn arm<O>(&mut self, armed: Armed<K>, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        let order = owner.order();
        let Some(origin) = order.iter().position(|id| *id == armed.item) else {
            warn!(item = ?armed.item, "armed item is not in the list");
            self.trigger.release();
            self.gesture.reset();
            return Transition::Abandoned;
        };
        let grab = match self.registry.get(&armed.item) {
            Some(rect) => armed.anchor.translate(-rect.x, -rect.y),
            None => Point::ORIGIN,
        };

        let session = DragSession::new(armed.item, origin, order, armed.anchor, grab);
        let snapshot = session.snapshot();
        self.session = Some(session);
        self.gesture.open();
        debug!(item = ?snapshot.item, origin, "drag armed");
        Transition::Armed(snapshot)
    }

    fn pointer<O>(&mut self, raw: RawPointer, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        if self.session.is_some() {
            return match self.gesture.normalize(&raw) {
                Some(sample) => self.apply(sample, owner),
                None => {
                    trace!(?raw, "pointer event ignored");
                    Transition::Ignored
                }
            };
        }

        if !self.trigger.is_pressed() || self.gesture.primary() != Some(raw.id()) {
            return Transition::Ignored;
        }
        match raw {
            RawPointer::Move { point, at, .. } => {
                if !self.trigger.moved(point) {
                    self.gesture.reset();
                    trace!("press moved past slop");
                    return Transition::Abandoned;
                }
                match self.trigger.poll(at) {
                    Some(armed) => self.arm(armed, owner),
                    None => Transition::Ignored,
                }
            }
            RawPointer::Up { .. } | RawPointer::Cancel { .. } => {
                self.trigger.release();
                self.gesture.reset();
                Transition::Abandoned
            }
            RawPointer::Down { .. } => Transition::Ignored,
        }
    }

    fn apply<O>(&mut self, sample: PointerSample, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return Transition::Ignored;
        };

        match (session.status(), sample.phase) {
            (DragStatus::Armed, Phase::Down) => {
                // The opening sample is already a real position.
                session.record(sample);
                session.activate();
                tracker::track(session, &self.registry, self.config.axis);
                debug!(item = ?session.item(), target = session.target_index(), "drag active");
                Transition::Activated
            }
            (DragStatus::Armed, Phase::Up | Phase::Cancelled) => {
                self.end_session();
                debug!("armed press released without moving");
                Transition::Tapped
            }
            (DragStatus::Active, Phase::Move) => {
                session.record(sample);
                let changed = tracker::track(session, &self.registry, self.config.axis);
                let target = session.target_index();
                if changed {
                    trace!(target, "target moved");
                }
                Transition::Tracked { target, changed }
            }
            (DragStatus::Active, Phase::Up) => {
                session.record(sample);
                self.release(owner)
            }
            (DragStatus::Active, Phase::Cancelled) => {
                session.record(sample);
                self.cancel()
            }
            (status, phase) => {
                trace!(?status, ?phase, "out-of-order sample ignored");
                Transition::Ignored
            }
        }
    }

    fn release<O>(&mut self, owner: &mut O) -> Transition<K>
    where
        O: OrderOwner<K> + ?Sized,
    {
        let Some(mut session) = self.end_session() else {
            return Transition::Ignored;
        };
        let from = session.origin_index();
        let to = session.target_index();

        match commit::commit(session.order(), from, to, owner, self.config.skip_noop_commit) {
            Ok(CommitOutcome::Applied(order)) => {
                session.finish(DragStatus::Committed);
                info!(item = ?session.item(), from, to, "reorder committed");
                Transition::Committed(order)
            }
            Ok(CommitOutcome::Skipped) => {
                session.finish(DragStatus::Committed);
                debug!(item = ?session.item(), "drag released in place");
                Transition::CommitSkipped
            }
            Err(e) => {
                session.finish(DragStatus::Cancelled);
                warn!(item = ?session.item(), error = %e, "reorder not committed");
                Transition::CommitFailed(e)
            }
        }
    }

    fn end_session(&mut self) -> Option<DragSession<K>> {
        self.trigger.release();
        self.gesture.reset();
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::reorder::commit::OrderRejected;
    use crate::reorder::gesture::PointerId;

    const H: f32 = 40.0;
    const X: f32 = 50.0;

    /// List owner that counts `set_order` calls
    struct Owner {
        order: Vec<char>,
        calls: usize,
        refuse: bool,
    }

    impl Owner {
        fn new(order: &[char]) -> Self {
            Self { order: order.to_vec(), calls: 0, refuse: false }
        }
    }

    impl OrderOwner<char> for Owner {
        fn order(&self) -> Vec<char> {
            self.order.clone()
        }

        fn set_order(&mut self, order: Vec<char>) -> Result<(), OrderRejected> {
            self.calls += 1;
            if self.refuse {
                return Err(OrderRejected::new("locked"));
            }
            self.order = order;
            Ok(())
        }
    }

    /// Controller with `ids` stacked vertically, equal height
    fn controller(ids: &[char], config: ReorderConfig) -> ReorderController<char> {
        let mut c = ReorderController::new(config);
        for (i, &id) in ids.iter().enumerate() {
            c.record_layout(id, Rect::new(0.0, i as f32 * H, 200.0, H));
        }
        c
    }

    fn down(id: PointerId, y: f32, at: f64) -> RawPointer {
        RawPointer::Down { id, point: Point::new(X, y), at }
    }

    fn mv(id: PointerId, y: f32, at: f64) -> ReorderEvent<char> {
        ReorderEvent::Pointer(RawPointer::Move { id, point: Point::new(X, y), at })
    }

    fn up(id: PointerId, y: f32, at: f64) -> ReorderEvent<char> {
        ReorderEvent::Pointer(RawPointer::Up { id, point: Point::new(X, y), at })
    }

    fn press(item: char, y: f32, at: f64) -> ReorderEvent<char> {
        ReorderEvent::Press { item, pointer: down(1, y, at) }
    }

    /// Press `item` at `y`, wait out the threshold and start moving
    fn start_drag(c: &mut ReorderController<char>, owner: &mut Owner, item: char, y: f32) {
        assert_eq!(c.handle(press(item, y, 0.0), owner), Transition::Pressed);
        assert!(matches!(c.handle(ReorderEvent::Tick { now: 400.0 }, owner), Transition::Armed(_)));
        assert_eq!(c.handle(mv(1, y, 410.0), owner), Transition::Activated);
    }

    #[test]
    fn drag_first_into_lower_half_of_second() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(mv(1, 70.0, 420.0), &mut owner), Transition::Tracked { target: 1, changed: true });
        assert_eq!(c.handle(up(1, 70.0, 430.0), &mut owner), Transition::Committed(vec!['b', 'a', 'c']));
        assert_eq!(owner.order, vec!['b', 'a', 'c']);
        assert_eq!(owner.calls, 1);
        assert!(c.is_idle());
    }

    #[test]
    fn drag_last_into_upper_half_of_first() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'c', 100.0);
        c.handle(mv(1, 60.0, 420.0), &mut owner);
        c.handle(mv(1, 10.0, 430.0), &mut owner);
        assert_eq!(c.snapshot().map(|s| s.target_index), Some(0));
        c.handle(up(1, 10.0, 440.0), &mut owner);
        assert_eq!(owner.order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn only_latest_sample_counts() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        c.handle(mv(1, 110.0, 420.0), &mut owner);
        c.handle(mv(1, 25.0, 430.0), &mut owner);
        c.handle(up(1, 25.0, 440.0), &mut owner);
        assert_eq!(owner.order, vec!['a', 'b', 'c']);
        assert_eq!(owner.calls, 1);
    }

    #[test]
    fn cancel_never_touches_owner() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        c.handle(mv(1, 110.0, 420.0), &mut owner);
        let t = c.handle(ReorderEvent::Pointer(RawPointer::Cancel { id: 1, at: 430.0 }), &mut owner);
        assert_eq!(t, Transition::Cancelled);
        assert_eq!(owner.calls, 0);
        assert!(c.session().is_none());
    }

    #[test]
    fn escape_cancels_active_drag() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(ReorderEvent::Escape, &mut owner), Transition::Cancelled);
        assert_eq!(c.handle(up(1, 60.0, 500.0), &mut owner), Transition::Ignored);
        assert_eq!(owner.calls, 0);
    }

    #[test]
    fn release_before_threshold_is_plain_tap() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        assert_eq!(c.handle(up(1, 20.0, 100.0), &mut owner), Transition::Abandoned);
        assert_eq!(c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner), Transition::Ignored);
        assert!(c.is_idle());
    }

    #[test]
    fn moving_before_threshold_abandons() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        assert_eq!(c.handle(mv(1, 60.0, 50.0), &mut owner), Transition::Abandoned);
        assert!(c.is_idle());
    }

    #[test]
    fn held_move_after_threshold_arms_without_tick() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        assert!(matches!(c.handle(mv(1, 22.0, 450.0), &mut owner), Transition::Armed(_)));
    }

    #[test]
    fn release_after_arm_before_move_is_tap() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner);
        assert_eq!(c.handle(up(1, 20.0, 450.0), &mut owner), Transition::Tapped);
        assert_eq!(owner.calls, 0);
        assert!(c.is_idle());
    }

    #[test]
    fn zero_threshold_arms_on_press() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let config = ReorderConfig::default().with_long_press(Duration::ZERO);
        let mut c = controller(&ids, config);

        let t = c.handle(press('a', 20.0, 0.0), &mut owner);
        assert!(matches!(t, Transition::Armed(DragSnapshot { item: 'a', origin_index: 0, .. })));
    }

    #[test]
    fn zero_threshold_press_move_release_commits() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let config = ReorderConfig::default().with_long_press(Duration::ZERO).with_slop(0.0);
        let mut c = controller(&ids, config);

        assert!(matches!(c.handle(press('a', 20.0, 0.0), &mut owner), Transition::Armed(_)));
        assert_eq!(c.handle(mv(1, 70.0, 5.0), &mut owner), Transition::Activated);
        assert_eq!(c.snapshot().map(|s| s.target_index), Some(1));
        assert_eq!(c.handle(up(1, 70.0, 10.0), &mut owner), Transition::Committed(vec!['b', 'a', 'c']));
        assert_eq!(owner.order, vec!['b', 'a', 'c']);
        assert_eq!(owner.calls, 1);
    }

    #[test]
    fn first_move_after_hold_sets_target() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('c', 100.0, 0.0), &mut owner);
        c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner);
        assert_eq!(c.handle(mv(1, 10.0, 410.0), &mut owner), Transition::Activated);
        assert_eq!(c.snapshot().map(|s| s.target_index), Some(0));
        c.handle(up(1, 10.0, 420.0), &mut owner);
        assert_eq!(owner.order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn escape_while_pressed_abandons() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        assert_eq!(c.handle(ReorderEvent::Escape, &mut owner), Transition::Abandoned);
        assert!(c.is_idle());
        assert_eq!(c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner), Transition::Ignored);
        assert_eq!(c.handle(ReorderEvent::Escape, &mut owner), Transition::Ignored);
    }

    #[test]
    fn unmounting_pressed_item_abandons() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        c.handle(press('a', 20.0, 0.0), &mut owner);
        assert_eq!(c.handle(ReorderEvent::Unmount { item: 'a' }, &mut owner), Transition::Abandoned);
        assert!(c.is_idle());
        assert_eq!(c.registry().get(&'a'), None);
        assert_eq!(c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner), Transition::Ignored);
        assert_eq!(owner.calls, 0);
    }

    #[test]
    fn armed_snapshot_places_affordance_under_grab_point() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'b', 55.0);
        c.handle(mv(1, 75.0, 420.0), &mut owner);
        // grabbed 15px below b's top edge at x=50
        assert_eq!(c.snapshot().map(|s| s.affordance), Some(Point::new(0.0, 60.0)));
    }

    #[test]
    fn secondary_touch_is_ignored() {
        let ids = ['a', 'b', 'c'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(mv(2, 110.0, 420.0), &mut owner), Transition::Ignored);
        assert_eq!(c.handle(up(2, 110.0, 430.0), &mut owner), Transition::Ignored);
        assert_eq!(c.handle(press('c', 100.0, 440.0), &mut owner), Transition::Ignored);
        assert_eq!(c.snapshot().map(|s| s.target_index), Some(0));
        assert_eq!(c.handle(up(1, 20.0, 450.0), &mut owner), Transition::Committed(vec!['a', 'b', 'c']));
    }

    #[test]
    fn single_item_list_never_changes() {
        let ids = ['a'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        c.handle(mv(1, 900.0, 420.0), &mut owner);
        c.handle(mv(1, -900.0, 430.0), &mut owner);
        c.handle(up(1, -900.0, 440.0), &mut owner);
        assert_eq!(owner.order, vec!['a']);
    }

    #[test]
    fn noop_drag_commits_equal_list_by_default() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(up(1, 20.0, 420.0), &mut owner), Transition::Committed(vec!['a', 'b']));
        assert_eq!(owner.calls, 1);
    }

    #[test]
    fn noop_drag_skipped_when_configured() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let config = ReorderConfig::default().with_skip_noop_commit(true);
        let mut c = controller(&ids, config);

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(up(1, 20.0, 420.0), &mut owner), Transition::CommitSkipped);
        assert_eq!(owner.calls, 0);
    }

    #[test]
    fn rejected_commit_is_reported() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        owner.refuse = true;
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        c.handle(mv(1, 70.0, 420.0), &mut owner);
        let t = c.handle(up(1, 70.0, 430.0), &mut owner);
        assert_eq!(t, Transition::CommitFailed(CommitError::Rejected(OrderRejected::new("locked"))));
        assert_eq!(owner.calls, 1);
        assert!(c.is_idle());
    }

    #[test]
    fn unmounting_dragged_item_cancels() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());

        start_drag(&mut c, &mut owner, 'a', 20.0);
        assert_eq!(c.handle(ReorderEvent::Unmount { item: 'b' }, &mut owner), Transition::Recorded);
        assert!(c.session().is_some());
        assert_eq!(c.handle(ReorderEvent::Unmount { item: 'a' }, &mut owner), Transition::Cancelled);
        assert_eq!(c.registry().get(&'a'), None);
        assert_eq!(owner.calls, 0);
    }

    #[test]
    fn arming_unknown_item_abandons() {
        let mut owner = Owner::new(&['a']);
        let mut c = controller(&['a'], ReorderConfig::default());

        c.handle(press('z', 20.0, 0.0), &mut owner);
        assert_eq!(c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner), Transition::Abandoned);
        assert!(c.is_idle());
    }

    #[test]
    fn move_without_press_is_ignored() {
        let ids = ['a', 'b'];
        let mut owner = Owner::new(&ids);
        let mut c = controller(&ids, ReorderConfig::default());
        assert_eq!(c.handle(mv(1, 70.0, 0.0), &mut owner), Transition::Ignored);
        assert_eq!(c.handle(up(1, 70.0, 1.0), &mut owner), Transition::Ignored);
    }

    #[test]
    fn layout_events_update_registry() {
        let mut owner = Owner::new(&['a']);
        let mut c = ReorderController::new(ReorderConfig::default());
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(c.handle(ReorderEvent::Layout { item: 'a', rect }, &mut owner), Transition::Recorded);
        assert_eq!(c.registry().get(&'a'), Some(rect));
    }

    fn pointer_strategy() -> impl Strategy<Value = Vec<(bool, f32)>> {
        // (secondary pointer?, y)
        proptest::collection::vec((any::<bool>(), -100.0f32..300.0), 0..16)
    }

    proptest! {
        #[test]
        fn sequences_ending_in_cancel_never_commit(
            start in 0usize..5,
            moves in pointer_strategy(),
            arm in any::<bool>(),
            escape in any::<bool>(),
        ) {
            let ids = ['a', 'b', 'c', 'd', 'e'];
            let mut owner = Owner::new(&ids);
            let mut c = controller(&ids, ReorderConfig::default());
            let y = start as f32 * H + H / 2.0;

            c.handle(press(ids[start], y, 0.0), &mut owner);
            if arm {
                c.handle(ReorderEvent::Tick { now: 400.0 }, &mut owner);
            }
            // unarmed moves stay under the threshold
            let base = if arm { 400.0 } else { 100.0 };
            for (i, &(secondary, y)) in moves.iter().enumerate() {
                let id = if secondary { 2 } else { 1 };
                c.handle(mv(id, y, base + i as f64), &mut owner);
            }
            if escape {
                c.handle(ReorderEvent::Escape, &mut owner);
            } else {
                c.handle(ReorderEvent::Pointer(RawPointer::Cancel { id: 1, at: 1000.0 }), &mut owner);
            }

            prop_assert_eq!(owner.calls, 0);
            prop_assert_eq!(&owner.order, &ids.to_vec());
            prop_assert!(c.is_idle());
        }

        #[test]
        fn committed_order_is_a_permutation(
            start in 0usize..5,
            target_y in -100.0f32..300.0,
        ) {
            let ids = ['a', 'b', 'c', 'd', 'e'];
            let mut owner = Owner::new(&ids);
            let mut c = controller(&ids, ReorderConfig::default());
            let y = start as f32 * H + H / 2.0;

            start_drag(&mut c, &mut owner, ids[start], y);
            c.handle(mv(1, target_y, 420.0), &mut owner);
            let target = c.snapshot().map(|s| s.target_index).unwrap_or(start);
            c.handle(up(1, target_y, 430.0), &mut owner);

            prop_assert_eq!(owner.calls, 1);
            prop_assert_eq!(&owner.order, &commit::reordered(&ids, start, target));
            let mut sorted = owner.order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, ids.to_vec());
        }
    }
}
