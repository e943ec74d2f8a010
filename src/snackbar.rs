//! A single snackbar and its lifecycle
//!
//! A snackbar is built, attached to the wrapper of its position and
//! registered in one step. It then stays visible until its timer fires, a
//! button dismisses it, or it is destroyed directly. Dismissal hides it from
//! assistive technology, waits for the element's exit animation, detaches
//! it, unregisters it, and lays out the remaining snackbars again.
//!
//! Every operation here runs on the thread driving the [`tokio::task::LocalSet`];
//! timers and exit animation waits are spawned with
//! [`tokio::task::spawn_local`], so a dismissal runs to completion whether or
//! not anyone awaits it.

use crate::constants::ARIA_HIDDEN;
use crate::dom::{Element, EventKind};
use crate::manager::Context;
use crate::options::{SnackInstanceOptions, SnackOptions};
use crate::rendering::{Transform, build_card, get_wrapper, stack};
use snackbars_util::{Position, ThemeRules};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// Lifecycle of a snackbar after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Visible,
    /// Hidden from assistive technology, waiting for the exit animation
    Dismissing,
    /// Detached and unregistered
    Destroyed,
}

struct Inner {
    id: u64,
    message: String,
    options: SnackInstanceOptions,
    ctx: Rc<Context>,
    wrapper: Element,
    el: RefCell<Option<Element>>,
    timer: RefCell<Option<JoinHandle<()>>>,
    state: Cell<State>,
    destroyed: watch::Sender<bool>,
}

/// Handle to a live (or finished) snackbar; clones share the same instance
#[derive(Clone)]
pub struct Snackbar(Rc<Inner>);

impl Snackbar {
    pub(crate) fn new(ctx: Rc<Context>, message: &str, options: SnackOptions) -> Self {
        let options = options.resolve(&ctx.config);
        let position = options.position;
        let wrapper = get_wrapper(&ctx.document, position);
        let (destroyed, _) = watch::channel(false);

        let snack = Snackbar(Rc::new(Inner {
            id: ctx.next_id(),
            message: message.to_string(),
            options,
            ctx,
            wrapper,
            el: RefCell::new(None),
            timer: RefCell::new(None),
            state: Cell::new(State::Visible),
            destroyed,
        }));

        snack.insert();
        snack.0.ctx.registry.borrow_mut().push(position, snack.clone());
        snack.stack();

        debug!(
            "Created snackbar {} at {} (timeout {}ms)",
            snack.0.id, position, snack.0.options.timeout
        );
        snack
    }

    /// Build the element, wire its buttons and hover handlers, and attach it
    fn insert(&self) {
        let card = build_card(&self.0.ctx.document, &self.0.message, &self.0.options);

        for (button, action) in card.buttons {
            let weak = self.downgrade();
            button.add_event_listener(EventKind::Click, move |button| {
                let Some(snack) = Snackbar::upgrade(&weak) else {
                    return;
                };
                snack.stop_timer();
                match &action.callback {
                    Some(callback) => callback(button, &snack),
                    None => snack.request_destroy(),
                }
            });
        }

        self.start_timer();

        let weak = self.downgrade();
        card.root.add_event_listener(EventKind::MouseEnter, move |_| {
            if let Some(snack) = Snackbar::upgrade(&weak) {
                snack.expand();
            }
        });
        let weak = self.downgrade();
        card.root.add_event_listener(EventKind::MouseLeave, move |_| {
            if let Some(snack) = Snackbar::upgrade(&weak) {
                snack.stack();
            }
        });

        self.0.wrapper.append_child(&card.root);
        *self.0.el.borrow_mut() = Some(card.root);
    }

    fn downgrade(&self) -> Weak<Inner> {
        Rc::downgrade(&self.0)
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Snackbar> {
        weak.upgrade().map(Snackbar)
    }

    pub fn id(&self) -> u64 {
        self.0.id
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }

    pub fn options(&self) -> &SnackInstanceOptions {
        &self.0.options
    }

    pub fn theme(&self) -> &ThemeRules {
        &self.0.options.theme
    }

    pub fn position(&self) -> Position {
        self.0.options.position
    }

    /// Wrapper element of this snackbar's position
    pub fn wrapper(&self) -> &Element {
        &self.0.wrapper
    }

    /// Root element, present until the snackbar has been detached
    pub fn element(&self) -> Option<Element> {
        self.0.el.borrow().clone()
    }

    pub fn state(&self) -> State {
        self.0.state.get()
    }

    pub fn is_destroyed(&self) -> bool {
        self.state() == State::Destroyed
    }

    /// Whether an auto-dismiss timer is currently armed
    pub fn has_timer(&self) -> bool {
        self.0.timer.borrow().is_some()
    }

    /// Arm the auto-dismiss timer.
    ///
    /// Does nothing when the timeout is zero, a timer is already armed, or
    /// the snackbar is no longer visible. Each arming waits the full timeout.
    ///
    /// # Panics
    ///
    /// When a timer has to be armed outside a [`tokio::task::LocalSet`].
    pub fn start_timer(&self) {
        let timeout = self.0.options.timeout;
        if timeout == 0 || self.state() != State::Visible || self.has_timer() {
            return;
        }

        let weak = self.downgrade();
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(Duration::from_millis(timeout)).await;
            let Some(snack) = Snackbar::upgrade(&weak) else {
                return;
            };
            // Disarm without aborting: this task is the timer.
            snack.0.timer.borrow_mut().take();
            trace!("Snackbar {} timed out", snack.0.id);
            snack.dismiss().await;
        });
        *self.0.timer.borrow_mut() = Some(handle);
        trace!("Armed {}ms timer for snackbar {}", timeout, self.0.id);
    }

    /// Cancel the auto-dismiss timer, if armed
    pub fn stop_timer(&self) {
        if let Some(handle) = self.0.timer.borrow_mut().take() {
            handle.abort();
            trace!("Stopped timer for snackbar {}", self.0.id);
        }
    }

    /// Lay out this snackbar's position as a compact pile and resume every
    /// timer there.
    ///
    /// Cards `max_stack` or more levels below the newest are hidden, using
    /// this snackbar's `max_stack`.
    pub fn stack(&self) {
        let ctx = &self.0.ctx;
        let position = self.position();
        let instances = {
            let mut registry = ctx.registry.borrow_mut();
            registry.set_stacked(position, true);
            registry.snapshot(position)
        };

        let len = instances.len();
        for (index, instance) in instances.iter().enumerate() {
            instance.start_timer();
            if let Some(el) = instance.element() {
                let depth = stack::depth(index, len);
                el.set_style("transform", &Transform::stacked(depth, ctx.geometry).to_css());
                el.set_style(
                    "opacity",
                    stack::opacity(stack::is_hidden(depth, self.0.options.max_stack)),
                );
            }
        }
        trace!("Stacked {} snackbars at {}", len, position);
    }

    /// Spread this snackbar's position into a vertical list and pause every
    /// timer there.
    ///
    /// Returns false, changing nothing, when this snackbar is itself hidden
    /// in the pile.
    pub fn expand(&self) -> bool {
        if let Some(el) = self.element() {
            if el.style("opacity").as_deref() == Some("0") {
                return false;
            }
        }

        let ctx = &self.0.ctx;
        let position = self.position();
        let instances = {
            let mut registry = ctx.registry.borrow_mut();
            registry.set_stacked(position, false);
            registry.snapshot(position)
        };

        let len = instances.len();
        for (index, instance) in instances.iter().enumerate() {
            instance.stop_timer();
            if let Some(el) = instance.element() {
                let depth = stack::depth(index, len);
                el.set_style(
                    "transform",
                    &Transform::expanded(depth, el.client_height()).to_css(),
                );
                el.set_style(
                    "opacity",
                    stack::opacity(stack::is_hidden(depth, self.0.options.max_stack)),
                );
            }
        }
        trace!("Expanded {} snackbars at {}", len, position);
        true
    }

    /// Cancel the timer and dismiss.
    ///
    /// The dismissal is started before this returns: the timer is cancelled,
    /// `aria-hidden` is set, and the removal either happens at once or is
    /// handed to a local task waiting for the exit animation. The returned
    /// future only observes completion, so dropping it does not stop the
    /// dismissal. Destroying an already destroyed snackbar resolves at once,
    /// and a second call while dismissing resolves together with the first.
    ///
    /// # Panics
    ///
    /// When the element has an active animation or transition and this is
    /// called outside a [`tokio::task::LocalSet`].
    pub fn destroy(&self) -> impl Future<Output = ()> + use<> {
        self.stop_timer();
        self.dismiss()
    }

    /// [`Snackbar::destroy`] without waiting, for synchronous callbacks
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Snackbar::destroy`].
    pub fn request_destroy(&self) {
        self.stop_timer();
        self.begin_dismiss();
    }

    fn dismiss(&self) -> impl Future<Output = ()> + use<> {
        self.begin_dismiss();
        let mut destroyed = self.0.destroyed.subscribe();
        async move {
            _ = destroyed.wait_for(|done| *done).await;
        }
    }

    fn begin_dismiss(&self) {
        if self.state() != State::Visible {
            return;
        }
        let Some(el) = self.element() else {
            self.0.state.set(State::Destroyed);
            self.0.destroyed.send_replace(true);
            return;
        };

        self.0.state.set(State::Dismissing);
        el.set_attribute(ARIA_HIDDEN, "true");
        debug!("Dismissing snackbar {}", self.0.id);

        match el.animation_event() {
            Some(kind) => {
                let rx = el.once(kind);
                let snack = self.clone();
                tokio::task::spawn_local(async move {
                    snack.wait_for_animation(kind, rx).await;
                    snack.finish_dismiss(&el);
                });
            }
            None => self.finish_dismiss(&el),
        }
    }

    async fn wait_for_animation(&self, kind: EventKind, rx: oneshot::Receiver<()>) {
        match self.0.ctx.config.dismiss_timeout() {
            Some(limit) => {
                if tokio::time::timeout(limit, rx).await.is_err() {
                    warn!(
                        "Snackbar {} did not report {:?} within {:?}, removing it anyway",
                        self.0.id, kind, limit
                    );
                }
            }
            None => {
                _ = rx.await;
            }
        }
    }

    fn finish_dismiss(&self, el: &Element) {
        if let Some(parent) = el.parent() {
            parent.remove_child(el);
        }

        let ctx = &self.0.ctx;
        let position = self.position();
        let (removed, stacked) = {
            let mut registry = ctx.registry.borrow_mut();
            let removed = registry
                .remove_first(position, |s| s.element().as_ref() == Some(el))
                .is_some();
            (removed, registry.is_stacked(position))
        };
        *self.0.el.borrow_mut() = None;
        self.0.state.set(State::Destroyed);

        if stacked {
            self.stack();
        } else {
            self.expand();
        }

        self.0.destroyed.send_replace(true);
        debug!(
            "Destroyed snackbar {} (unregistered: {})",
            self.0.id, removed
        );
    }
}

impl PartialEq for Snackbar {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Snackbar {}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("id", &self.0.id)
            .field("message", &self.0.message)
            .field("position", &self.0.options.position)
            .field("state", &self.0.state.get())
            .finish()
    }
}
