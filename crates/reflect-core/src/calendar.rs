use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};

use crate::datetime::format_local_date;

const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December"
];

/// One clickable day in the month grid.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DayCell {
  pub date:        NaiveDate,
  pub in_month:    bool,
  pub is_today:    bool,
  pub is_selected: bool
}

/// Month being browsed plus the pending (not yet confirmed) pick.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarViewState {
  pub visible_month: NaiveDate,
  pub selected_date: NaiveDate
}

impl CalendarViewState {
  #[must_use]
  pub fn starting_at(
    today: NaiveDate
  ) -> Self {
    Self {
      visible_month: first_day_of_month(
        today.year(),
        today.month()
      ),
      selected_date: today
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarPicker {
  state:      CalendarViewState,
  week_start: Weekday,
  open:       bool
}

impl CalendarPicker {
  #[must_use]
  pub fn new(
    today: NaiveDate,
    week_start: Weekday
  ) -> Self {
    Self {
      state: CalendarViewState::starting_at(
        today
      ),
      week_start,
      open: false
    }
  }

  /// Discards any in-progress browsing and starts over at today.
  pub fn open(
    &mut self,
    today: NaiveDate
  ) {
    self.state =
      CalendarViewState::starting_at(
        today
      );
    self.open = true;
    tracing::debug!(
      month = %self.state.visible_month,
      "calendar opened"
    );
  }

  pub fn close(&mut self) {
    self.open = false;
  }

  /// Closes without handing a date to anyone.
  pub fn cancel(&mut self) {
    tracing::debug!(
      pending = %self.state.selected_date,
      "calendar cancelled"
    );
    self.close();
  }

  /// Closes and returns the pending pick as a local `YYYY-MM-DD`.
  pub fn confirm(&mut self) -> String {
    let date = format_local_date(
      self.state.selected_date
    );
    tracing::debug!(date = %date, "calendar confirmed");
    self.close();
    date
  }

  pub fn navigate_month(
    &mut self,
    delta: i32
  ) {
    self.state.visible_month =
      shift_months(
        self.state.visible_month,
        delta
      );
  }

  /// Moves the selection. Picking a filler day from an adjacent month
  /// does not change the visible month.
  pub fn select_day(
    &mut self,
    date: NaiveDate
  ) {
    self.state.selected_date = date;
  }

  #[must_use]
  pub fn is_open(&self) -> bool {
    self.open
  }

  #[must_use]
  pub fn visible_month(
    &self
  ) -> NaiveDate {
    self.state.visible_month
  }

  #[must_use]
  pub fn selected_date(
    &self
  ) -> NaiveDate {
    self.state.selected_date
  }

  #[must_use]
  pub fn week_start(&self) -> Weekday {
    self.week_start
  }

  #[must_use]
  pub fn month_label(&self) -> String {
    month_label(self.state.visible_month)
  }

  #[must_use]
  pub fn grid(
    &self,
    today: NaiveDate
  ) -> Vec<DayCell> {
    month_grid(
      self.state.visible_month,
      self.state.selected_date,
      today,
      self.week_start
    )
  }
}

/// Cells for the month containing `month`: leading days of the
/// previous month, the month itself, then leading days of the next
/// month until the grid is made of whole weeks.
#[must_use]
pub fn month_grid(
  month: NaiveDate,
  selected: NaiveDate,
  today: NaiveDate,
  week_start: Weekday
) -> Vec<DayCell> {
  let first = first_day_of_month(
    month.year(),
    month.month()
  );
  let last = last_day_of_month(
    month.year(),
    month.month()
  );
  let grid_start =
    start_of_week(first, week_start);
  let leading =
    (first - grid_start).num_days();
  let in_month =
    i64::from(last.day());
  let trailing =
    (7 - (leading + in_month) % 7) % 7;
  let total = leading + in_month + trailing;

  (0..total)
    .map(|offset| {
      let date =
        add_days(grid_start, offset);
      DayCell {
        date,
        in_month: date.month()
          == first.month()
          && date.year() == first.year(),
        is_today: date == today,
        is_selected: date == selected
      }
    })
    .collect()
}

#[must_use]
pub fn month_label(
  month: NaiveDate
) -> String {
  let index = month.month0() as usize;
  format!(
    "{} {}",
    MONTH_NAMES[index],
    month.year()
  )
}

#[must_use]
pub fn weekday_labels(
  week_start: Weekday
) -> Vec<&'static str> {
  match week_start {
    | Weekday::Mon => {
      vec![
        "Mon", "Tue", "Wed", "Thu",
        "Fri", "Sat", "Sun",
      ]
    }
    | _ => {
      vec![
        "Sun", "Mon", "Tue", "Wed",
        "Thu", "Fri", "Sat",
      ]
    }
  }
}

#[must_use]
pub fn parse_week_start(
  raw: &str
) -> Weekday {
  if raw
    .trim()
    .eq_ignore_ascii_case("monday")
  {
    Weekday::Mon
  } else {
    Weekday::Sun
  }
}

#[must_use]
pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let total = date.year() * 12
    + date.month0() as i32
    + months;
  let year = total.div_euclid(12);
  let month =
    total.rem_euclid(12) as u32 + 1;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

#[must_use]
pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

#[must_use]
pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

#[must_use]
pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn open_resets_browsing_to_today() {
    let today = date(2026, 10, 17);
    let mut picker =
      CalendarPicker::new(today, Weekday::Sun);
    picker.navigate_month(-5);
    picker.select_day(date(2026, 3, 2));
    picker.cancel();

    picker.open(today);
    assert!(picker.is_open());
    assert_eq!(
      picker.visible_month(),
      date(2026, 10, 1)
    );
    assert_eq!(picker.selected_date(), today);
  }

  #[test]
  fn navigation_rolls_year_boundaries() {
    let mut picker = CalendarPicker::new(
      date(2026, 12, 31),
      Weekday::Sun
    );
    picker.navigate_month(1);
    assert_eq!(
      picker.visible_month(),
      date(2027, 1, 1)
    );
    assert_eq!(
      picker.month_label(),
      "January 2027"
    );
    picker.navigate_month(-1);
    picker.navigate_month(-1);
    picker.navigate_month(-11);
    assert_eq!(
      picker.visible_month(),
      date(2025, 12, 1)
    );
  }

  #[test]
  fn month_round_trip_returns_to_start() {
    for year in [1999, 2024, 2026] {
      for month in 1..=12 {
        let start = date(year, month, 1);
        let mut picker =
          CalendarPicker::new(start, Weekday::Sun);
        picker.navigate_month(1);
        picker.navigate_month(-1);
        assert_eq!(
          picker.visible_month(),
          start
        );
      }
    }
  }

  #[test]
  fn grid_is_whole_weeks_for_every_month() {
    let today = date(2026, 10, 17);
    for year in [2023, 2024, 2100] {
      for month in 1..=12 {
        for week_start in
          [Weekday::Sun, Weekday::Mon]
        {
          let cells = month_grid(
            date(year, month, 1),
            today,
            today,
            week_start
          );
          assert_eq!(
            cells.len() % 7,
            0,
            "{year}-{month}"
          );
          assert_eq!(
            cells
              .iter()
              .filter(|c| c.in_month)
              .count() as u32,
            days_in_month(year, month)
          );
        }
      }
    }
  }

  #[test]
  fn leading_filler_uses_previous_month_days(
  ) {
    // 2026-10-01 is a Thursday: four filler cells from September.
    let cells = month_grid(
      date(2026, 10, 1),
      date(2026, 10, 17),
      date(2026, 10, 17),
      Weekday::Sun
    );
    let leading = cells
      .iter()
      .take_while(|c| !c.in_month)
      .map(|c| c.date.day())
      .collect::<Vec<_>>();
    assert_eq!(leading, vec![27, 28, 29, 30]);
    assert_eq!(
      cells.last().map(|c| c.date),
      Some(date(2026, 10, 31))
    );
    assert_eq!(cells.len(), 35);
  }

  #[test]
  fn february_in_leap_and_common_years() {
    let today = date(2026, 10, 17);
    // 2015-02-01 is a Sunday and 2015 is not a leap year.
    let common = month_grid(
      date(2015, 2, 1),
      today,
      today,
      Weekday::Sun
    );
    assert_eq!(common.len(), 28);
    let leap = month_grid(
      date(2024, 2, 1),
      today,
      today,
      Weekday::Sun
    );
    assert_eq!(
      leap
        .iter()
        .filter(|c| c.in_month)
        .count(),
      29
    );
    assert_eq!(leap.len() % 7, 0);
  }

  #[test]
  fn today_marked_only_in_current_month() {
    let today = date(2026, 10, 17);
    let mut picker =
      CalendarPicker::new(today, Weekday::Sun);
    let count_today =
      |cells: &[DayCell]| {
        cells
          .iter()
          .filter(|c| {
            c.is_today && c.in_month
          })
          .count()
      };
    assert_eq!(
      count_today(&picker.grid(today)),
      1
    );
    picker.navigate_month(2);
    assert_eq!(
      count_today(&picker.grid(today)),
      0
    );
  }

  #[test]
  fn selection_moves_and_never_duplicates(
  ) {
    let today = date(2026, 10, 17);
    let mut picker =
      CalendarPicker::new(today, Weekday::Sun);
    picker.select_day(date(2026, 10, 3));
    picker.select_day(date(2026, 10, 21));
    let selected = picker
      .grid(today)
      .into_iter()
      .filter(|c| c.is_selected)
      .map(|c| c.date)
      .collect::<Vec<_>>();
    assert_eq!(selected, vec![date(
      2026, 10, 21
    )]);
  }

  #[test]
  fn filler_click_keeps_visible_month() {
    let today = date(2026, 10, 17);
    let mut picker =
      CalendarPicker::new(today, Weekday::Sun);
    picker.select_day(date(2026, 9, 28));
    assert_eq!(
      picker.visible_month(),
      date(2026, 10, 1)
    );
    assert_eq!(
      picker.confirm(),
      "2026-09-28"
    );
    assert!(!picker.is_open());
  }

  #[test]
  fn confirm_formats_zero_padded_local_date(
  ) {
    let mut picker = CalendarPicker::new(
      date(2026, 10, 17),
      Weekday::Sun
    );
    picker.open(date(2026, 10, 17));
    picker.select_day(date(807, 1, 5));
    assert_eq!(
      picker.confirm(),
      "0807-01-05"
    );
  }
}
