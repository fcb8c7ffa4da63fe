//! Status decoding and event dispatch.
//!
//! The board reports events as bits in ESTATUS and raises its INT pin only
//! for the bits enabled in INTCONF. Both registers share one layout, so an
//! [`Event`]'s [`mask`](Event::mask) serves both to decide whether it fired
//! and to compute the interrupt enable mask.
//!
//! # Dispatch order
//!
//! [`Event::ALL`] is the dispatch order. A poll walks it once and invokes
//! every registered handler whose mask intersects the status byte:
//!
//! ```text
//! ButtonRelease    0x01
//! ButtonPush       0x02
//! ButtonLongPush   0x08
//! ButtonDoublePush 0x04
//! Increment        0x10
//! Decrement        0x20
//! Changed          0x30   (once, after Increment/Decrement)
//! Max              0x40
//! Min              0x80
//! MinMax           0xC0   (once, after Max/Min)
//! ```

use crate::registers::{
    STATUS_DECREMENT, STATUS_DOUBLE_PUSH, STATUS_INCREMENT, STATUS_LONG_PUSH, STATUS_MAX,
    STATUS_MIN, STATUS_PUSH, STATUS_PUSH_RELEASE,
};

/// An event a handler can be registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    ButtonRelease,
    ButtonPush,
    ButtonLongPush,
    ButtonDoublePush,
    Increment,
    Decrement,
    /// Counter moved in either direction.
    Changed,
    Max,
    Min,
    /// Counter hit either bound.
    MinMax,
}

impl Event {
    /// Number of distinct events.
    pub const COUNT: usize = 10;

    /// Every event, in dispatch order.
    pub const ALL: [Event; Event::COUNT] = [
        Event::ButtonRelease,
        Event::ButtonPush,
        Event::ButtonLongPush,
        Event::ButtonDoublePush,
        Event::Increment,
        Event::Decrement,
        Event::Changed,
        Event::Max,
        Event::Min,
        Event::MinMax,
    ];

    /// ESTATUS/INTCONF bits that trigger this event.
    pub const fn mask(self) -> u8 {
        match self {
            Event::ButtonRelease => STATUS_PUSH_RELEASE,
            Event::ButtonPush => STATUS_PUSH,
            Event::ButtonLongPush => STATUS_LONG_PUSH,
            Event::ButtonDoublePush => STATUS_DOUBLE_PUSH,
            Event::Increment => STATUS_INCREMENT,
            Event::Decrement => STATUS_DECREMENT,
            Event::Changed => STATUS_INCREMENT | STATUS_DECREMENT,
            Event::Max => STATUS_MAX,
            Event::Min => STATUS_MIN,
            Event::MinMax => STATUS_MAX | STATUS_MIN,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Snapshot of the ESTATUS register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(u8);

impl Status {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `true` if any bit of `mask` is set.
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    /// `true` if `event` fired in this snapshot.
    pub const fn has(self, event: Event) -> bool {
        self.contains(event.mask())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Optional callback per [`Event`].
///
/// Built once by the caller and lent to
/// [`I2cEncoderMini::update_status`](crate::I2cEncoderMini::update_status)
/// on every poll. Empty slots are skipped.
///
/// ```
/// use core::cell::Cell;
/// use i2c_encoder_mini::{Event, EventHandlers, Status};
///
/// let turns = Cell::new(0);
/// let mut on_change = || turns.set(turns.get() + 1);
/// let mut handlers = EventHandlers::new().on(Event::Changed, &mut on_change);
///
/// assert_eq!(handlers.interrupt_mask(), 0x30);
/// handlers.dispatch(Status::from_bits(0x30));
/// drop(handlers);
/// assert_eq!(turns.get(), 1);
/// ```
pub struct EventHandlers<'a> {
    slots: [Option<&'a mut dyn FnMut()>; Event::COUNT],
}

impl<'a> EventHandlers<'a> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn on(mut self, event: Event, handler: &'a mut dyn FnMut()) -> Self {
        self.set(event, handler);
        self
    }

    /// Register `handler` for `event`, replacing any previous one.
    pub fn set(&mut self, event: Event, handler: &'a mut dyn FnMut()) {
        self.slots[event.index()] = Some(handler);
    }

    /// Remove the handler for `event`.
    pub fn clear(&mut self, event: Event) {
        self.slots[event.index()] = None;
    }

    pub fn is_registered(&self, event: Event) -> bool {
        self.slots[event.index()].is_some()
    }

    /// INTCONF value that enables exactly the registered events.
    pub fn interrupt_mask(&self) -> u8 {
        Event::ALL
            .iter()
            .filter(|event| self.is_registered(**event))
            .fold(0, |mask, event| mask | event.mask())
    }

    /// Invoke the handler of every event present in `status`, in
    /// [`Event::ALL`] order. Returns the number of handlers called.
    pub fn dispatch(&mut self, status: Status) -> usize {
        let mut called = 0;
        for event in Event::ALL {
            if !status.has(event) {
                continue;
            }
            if let Some(handler) = self.slots[event.index()].as_mut() {
                handler();
                called += 1;
            }
        }
        called
    }
}

impl Default for EventHandlers<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EventHandlers<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for event in Event::ALL {
            if self.is_registered(event) {
                list.entry(&event);
            }
        }
        list.finish()
    }
}
