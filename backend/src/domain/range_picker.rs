//! Selection state machine behind the date and date-range pickers.
//!
//! The picker holds a [`SelectionState`] that only day clicks change, plus a
//! viewport month that only navigation changes. Visual tags for each grid day
//! are recomputed from the state on every render; no per-day flags are stored.

use crate::domain::date_math::{self, parse_iso, to_iso, CalendarDate};
use log::debug;
use shared::{Locale, PickerInitialValue, PickerMode, WeekStart};

/// Cells in the picker grid (six weeks)
pub const GRID_CELLS: u64 = 42;

/// Dates chosen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    /// One date anchored; in range mode the range is still open
    Single { anchor: CalendarDate },
    /// Both ends chosen, `start <= end`
    Complete { start: CalendarDate, end: CalendarDate },
}

/// Value handed back to the caller when a selection is finalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSelection {
    Single(CalendarDate),
    Range { start: CalendarDate, end: CalendarDate },
}

impl PickerSelection {
    pub fn start(&self) -> CalendarDate {
        match self {
            PickerSelection::Single(date) => *date,
            PickerSelection::Range { start, .. } => *start,
        }
    }

    pub fn end(&self) -> CalendarDate {
        match self {
            PickerSelection::Single(date) => *date,
            PickerSelection::Range { end, .. } => *end,
        }
    }

    /// Start (or single) date as `YYYY-MM-DD`
    pub fn start_iso(&self) -> String {
        to_iso(self.start())
    }

    /// End date as `YYYY-MM-DD`; `None` for a single-date selection
    pub fn end_iso(&self) -> Option<String> {
        match self {
            PickerSelection::Single(_) => None,
            PickerSelection::Range { end, .. } => Some(to_iso(*end)),
        }
    }

    /// Inclusive containment check
    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start() && date <= self.end()
    }
}

/// Visual tag attached to a rendered day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayTag {
    Today,
    Selected,
    RangeStart,
    RangeEnd,
    InRange,
    RangeSingle,
}

impl DayTag {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayTag::Today => "today",
            DayTag::Selected => "selected",
            DayTag::RangeStart => "range-start",
            DayTag::RangeEnd => "range-end",
            DayTag::InRange => "in-range",
            DayTag::RangeSingle => "range-single",
        }
    }
}

/// One cell of the picker grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerDay {
    pub date: CalendarDate,
    /// Day number (1-31)
    pub day: u32,
    /// False for filler days from the previous or next month
    pub in_current_month: bool,
    pub tags: Vec<DayTag>,
}

impl PickerDay {
    pub fn has_tag(&self, tag: DayTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Space-separated CSS classes for this cell
    pub fn css_classes(&self) -> String {
        let mut classes = vec![if self.in_current_month {
            "current-month"
        } else {
            "other-month"
        }];
        classes.extend(self.tags.iter().map(DayTag::css_class));
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePickerState {
    mode: PickerMode,
    selection: SelectionState,
    /// Displayed (year, month)
    viewport: (i32, u32),
}

impl RangePickerState {
    /// Create picker state from an optional initial value.
    ///
    /// Unparseable initial dates are ignored. The viewport opens on the
    /// initial start month, or on today's month when there is none.
    pub fn new(mode: PickerMode, initial: &PickerInitialValue, today: CalendarDate) -> Self {
        let start = initial.start.as_deref().and_then(parse_iso);
        let end = initial.end.as_deref().and_then(parse_iso);

        let selection = match (mode, start, end) {
            (_, None, _) => SelectionState::Empty,
            (PickerMode::Single, Some(anchor), _) => SelectionState::Single { anchor },
            (PickerMode::Range, Some(anchor), None) => SelectionState::Single { anchor },
            (PickerMode::Range, Some(a), Some(b)) => ordered(a, b),
        };
        let viewport = start.unwrap_or(today).year_month();

        Self {
            mode,
            selection,
            viewport,
        }
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn viewport(&self) -> (i32, u32) {
        self.viewport
    }

    /// Title above the grid, e.g. `Março 2024`
    pub fn header_label(&self, locale: Locale) -> String {
        let (year, month) = self.viewport;
        format!("{} {}", date_math::month_name(month, locale), year)
    }

    /// Apply a day click.
    ///
    /// In single mode the click finalizes immediately and the selection is
    /// returned. In range mode nothing is finalized here; `apply` does that.
    /// Clicking the anchor again completes a one-day range.
    pub fn on_day_click(&mut self, clicked: CalendarDate) -> Option<PickerSelection> {
        match self.mode {
            PickerMode::Single => {
                self.selection = SelectionState::Single { anchor: clicked };
                debug!("📅 Picker single selection: {}", clicked);
                Some(PickerSelection::Single(clicked))
            }
            PickerMode::Range => {
                self.selection = match self.selection {
                    SelectionState::Empty | SelectionState::Complete { .. } => {
                        SelectionState::Single { anchor: clicked }
                    }
                    SelectionState::Single { anchor } => ordered(anchor, clicked),
                };
                debug!("📅 Picker range state: {:?}", self.selection);
                None
            }
        }
    }

    /// Whether Apply is enabled
    pub fn can_apply(&self) -> bool {
        self.mode == PickerMode::Range && matches!(self.selection, SelectionState::Complete { .. })
    }

    /// Finalized range, only when both ends are chosen
    pub fn apply(&self) -> Option<PickerSelection> {
        match (self.mode, self.selection) {
            (PickerMode::Range, SelectionState::Complete { start, end }) => {
                Some(PickerSelection::Range { start, end })
            }
            _ => None,
        }
    }

    /// Discard any chosen dates
    pub fn cancel(&mut self) {
        self.selection = SelectionState::Empty;
    }

    pub fn prev_month(&mut self) {
        self.viewport = date_math::previous_month(self.viewport);
    }

    pub fn next_month(&mut self) {
        self.viewport = date_math::next_month(self.viewport);
    }

    /// Visual tags for one date under the current selection
    pub fn day_tags(&self, date: CalendarDate, today: CalendarDate) -> Vec<DayTag> {
        let mut tags = Vec::new();
        if date == today {
            tags.push(DayTag::Today);
        }

        match self.selection {
            SelectionState::Empty => {}
            SelectionState::Single { anchor } => {
                if date == anchor {
                    tags.push(DayTag::Selected);
                    if self.mode == PickerMode::Range {
                        tags.push(DayTag::RangeStart);
                    }
                }
            }
            SelectionState::Complete { start, end } => {
                if start == end {
                    if date == start {
                        tags.extend([
                            DayTag::Selected,
                            DayTag::RangeStart,
                            DayTag::RangeEnd,
                            DayTag::RangeSingle,
                        ]);
                    }
                } else if date == start {
                    tags.extend([DayTag::Selected, DayTag::RangeStart]);
                } else if date == end {
                    tags.extend([DayTag::Selected, DayTag::RangeEnd]);
                } else if date > start && date < end {
                    tags.push(DayTag::InRange);
                }
            }
        }

        tags
    }

    /// Six-week grid for the viewport month, padded with days from the
    /// neighbouring months so that the first column is `week_start`.
    pub fn month_grid(&self, today: CalendarDate, week_start: WeekStart) -> Vec<PickerDay> {
        let (year, month) = self.viewport;
        let Some(first) = CalendarDate::from_ymd(year, month, 1) else {
            return Vec::new();
        };

        let first_weekday = date_math::first_weekday_of_month(year, month);
        let leading = (first_weekday + 7 - week_start.offset()) % 7;
        let Some(grid_start) = first.sub_days(u64::from(leading)) else {
            return Vec::new();
        };

        (0..GRID_CELLS)
            .filter_map(|offset| grid_start.add_days(offset))
            .map(|date| PickerDay {
                date,
                day: date.day(),
                in_current_month: date.year_month() == self.viewport,
                tags: self.day_tags(date, today),
            })
            .collect()
    }
}

fn ordered(a: CalendarDate, b: CalendarDate) -> SelectionState {
    if b < a {
        SelectionState::Complete { start: b, end: a }
    } else {
        SelectionState::Complete { start: a, end: b }
    }
}
