//! Picker sessions and the registry that keeps at most one of them open.
//!
//! A [`PickerSession`] owns the selection state of one open picker together
//! with the caller's `on_select` callback. The [`PickerRegistry`] is owned by
//! whichever UI component hosts pickers; opening a new session there discards
//! the previous one without emitting anything.

use crate::domain::date_math::CalendarDate;
use crate::domain::range_picker::{PickerDay, PickerSelection, RangePickerState};
use crate::error::{DashboardError, Result};
use log::{debug, info};
use shared::{PickerInitialValue, PickerMode, WeekStart};
use std::fmt;
use uuid::Uuid;

/// Callback receiving the finalized selection
pub type OnSelect = Box<dyn FnMut(&PickerSelection)>;

pub struct PickerSession {
    id: Uuid,
    state: RangePickerState,
    on_select: OnSelect,
    open: bool,
}

impl PickerSession {
    pub fn new<F>(mode: PickerMode, initial: &PickerInitialValue, today: CalendarDate, on_select: F) -> Self
    where
        F: FnMut(&PickerSelection) + 'static,
    {
        Self {
            id: Uuid::new_v4(),
            state: RangePickerState::new(mode, initial, today),
            on_select: Box::new(on_select),
            open: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &RangePickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handle a day click. A single-mode click emits the selection and closes the session.
    pub fn click_day(&mut self, date: CalendarDate) -> Option<PickerSelection> {
        if !self.open {
            debug!("📅 Ignoring click on closed picker {}", self.id);
            return None;
        }
        let finalized = self.state.on_day_click(date);
        if let Some(selection) = finalized {
            self.emit(selection);
        }
        finalized
    }

    /// Emit the completed range and close. No-op unless both ends are chosen.
    pub fn apply(&mut self) -> Option<PickerSelection> {
        let selection = self.state.apply()?;
        self.emit(selection);
        Some(selection)
    }

    /// Close without emitting
    pub fn cancel(&mut self) {
        self.state.cancel();
        self.open = false;
        debug!("📅 Picker {} cancelled", self.id);
    }

    pub fn prev_month(&mut self) {
        self.state.prev_month();
    }

    pub fn next_month(&mut self) {
        self.state.next_month();
    }

    pub fn grid(&self, today: CalendarDate, week_start: WeekStart) -> Vec<PickerDay> {
        self.state.month_grid(today, week_start)
    }

    fn emit(&mut self, selection: PickerSelection) {
        info!(
            "📅 Picker {} selected {} - {:?}",
            self.id,
            selection.start_iso(),
            selection.end_iso()
        );
        (self.on_select)(&selection);
        self.open = false;
    }
}

impl fmt::Debug for PickerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSession")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

/// Holds the single live picker session
#[derive(Debug, Default)]
pub struct PickerRegistry {
    active: Option<PickerSession>,
}

impl PickerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a picker, discarding any session that is still open
    pub fn open<F>(&mut self, mode: PickerMode, initial: &PickerInitialValue, today: CalendarDate, on_select: F) -> Uuid
    where
        F: FnMut(&PickerSelection) + 'static,
    {
        if let Some(previous) = self.active.take() {
            info!("📅 Discarding uncommitted picker {}", previous.id());
        }
        let session = PickerSession::new(mode, initial, today, on_select);
        let id = session.id();
        info!("📅 Opened {:?} picker {}", mode, id);
        self.active = Some(session);
        id
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active.as_ref().map(PickerSession::id)
    }

    pub fn state(&self, id: Uuid) -> Result<&RangePickerState> {
        match &self.active {
            Some(session) if session.id() == id => Ok(session.state()),
            _ => Err(DashboardError::StaleSession(id)),
        }
    }

    pub fn click_day(&mut self, id: Uuid, date: CalendarDate) -> Result<Option<PickerSelection>> {
        let finalized = self.session_mut(id)?.click_day(date);
        self.release_closed();
        Ok(finalized)
    }

    pub fn apply(&mut self, id: Uuid) -> Result<Option<PickerSelection>> {
        let finalized = self.session_mut(id)?.apply();
        self.release_closed();
        Ok(finalized)
    }

    pub fn cancel(&mut self, id: Uuid) -> Result<()> {
        self.session_mut(id)?.cancel();
        self.release_closed();
        Ok(())
    }

    pub fn prev_month(&mut self, id: Uuid) -> Result<()> {
        self.session_mut(id)?.prev_month();
        Ok(())
    }

    pub fn next_month(&mut self, id: Uuid) -> Result<()> {
        self.session_mut(id)?.next_month();
        Ok(())
    }

    pub fn grid(&self, id: Uuid, today: CalendarDate, week_start: WeekStart) -> Result<Vec<PickerDay>> {
        Ok(self.state(id)?.month_grid(today, week_start))
    }

    fn session_mut(&mut self, id: Uuid) -> Result<&mut PickerSession> {
        match self.active.as_mut() {
            Some(session) if session.id() == id && session.is_open() => Ok(session),
            _ => Err(DashboardError::StaleSession(id)),
        }
    }

    fn release_closed(&mut self) {
        if self.active.as_ref().is_some_and(|session| !session.is_open()) {
            self.active = None;
        }
    }
}
