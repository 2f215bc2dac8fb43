//! Status evaluation for a vehicle with one fixed daily departure.

use crate::domain::{DepartureStatus, TimeOfDay};

/// A single daily departure with a boarding window and an en-route phase.
///
/// The day of such a vehicle partitions into four intervals around the
/// departure minute:
///
/// ```text
///   Scheduled        Boarding           EnRoute          Concluded
/// [0, dep - w) | [dep - w, dep] | (dep, dep + r) | [dep + r, 1440)
/// ```
///
/// where `w` is the boarding window and `r` the en-route duration. The
/// boarding interval is inclusive at both ends: at the departure minute
/// itself the vehicle still shows as boarding. When `dep - w` falls before
/// midnight the `Scheduled` interval is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDeparture {
    departure: TimeOfDay,
    boarding_window_mins: u16,
    en_route_mins: u16,
}

impl FixedDeparture {
    /// Create a fixed departure.
    ///
    /// Both durations may be zero; a zero boarding window means boarding
    /// shows only at the departure minute itself, and a zero en-route
    /// duration means the status jumps straight from boarding to concluded.
    pub fn new(departure: TimeOfDay, boarding_window_mins: u16, en_route_mins: u16) -> Self {
        Self {
            departure,
            boarding_window_mins,
            en_route_mins,
        }
    }

    /// The scheduled departure time.
    pub fn departure(&self) -> TimeOfDay {
        self.departure
    }

    /// How many minutes before departure boarding opens.
    pub fn boarding_window_mins(&self) -> u16 {
        self.boarding_window_mins
    }

    /// How many minutes after departure the vehicle is considered en route.
    pub fn en_route_mins(&self) -> u16 {
        self.en_route_mins
    }

    /// Evaluate the display status at the given time.
    ///
    /// Pure and total: every `TimeOfDay` maps to exactly one status.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::{DepartureStatus, TimeOfDay};
    /// use shuttle_server::schedule::FixedDeparture;
    ///
    /// let charter = FixedDeparture::new(TimeOfDay::from_hm(8, 0).unwrap(), 15, 60);
    /// let now = TimeOfDay::from_hm(7, 50).unwrap();
    /// assert_eq!(charter.status_at(now), DepartureStatus::Boarding);
    /// ```
    pub fn status_at(&self, now: TimeOfDay) -> DepartureStatus {
        // Work in i32 so a boarding window reaching back past midnight
        // cannot underflow; the Scheduled interval is then empty.
        let now = i32::from(now.minutes());
        let dep = i32::from(self.departure.minutes());
        let boarding_opens = dep - i32::from(self.boarding_window_mins);
        let en_route_ends = dep + i32::from(self.en_route_mins);

        if now < boarding_opens {
            DepartureStatus::Scheduled
        } else if now <= dep {
            DepartureStatus::Boarding
        } else if now < en_route_ends {
            DepartureStatus::EnRoute
        } else {
            DepartureStatus::Concluded
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::MINUTES_PER_DAY;
    use proptest::prelude::*;

    prop_compose! {
        fn any_time()(mins in 0u16..MINUTES_PER_DAY) -> TimeOfDay {
            TimeOfDay::new(mins).unwrap()
        }
    }

    prop_compose! {
        fn any_departure()(
            departure in any_time(),
            window in 0u16..120,
            en_route in 0u16..240,
        ) -> FixedDeparture {
            FixedDeparture::new(departure, window, en_route)
        }
    }

    proptest! {
        /// The four intervals partition the whole day: for every minute,
        /// exactly one of the interval predicates holds and the returned
        /// status matches it.
        #[test]
        fn intervals_partition_the_day(d in any_departure(), now in any_time()) {
            let n = i32::from(now.minutes());
            let dep = i32::from(d.departure().minutes());
            let opens = dep - i32::from(d.boarding_window_mins());
            let ends = dep + i32::from(d.en_route_mins());

            let scheduled = n < opens;
            let boarding = n >= opens && n <= dep;
            let en_route = n > dep && n < ends;
            let concluded = n >= ends && n > dep;

            let true_count =
                [scheduled, boarding, en_route, concluded].iter().filter(|&&b| b).count();
            prop_assert_eq!(true_count, 1);

            let expected = if scheduled {
                DepartureStatus::Scheduled
            } else if boarding {
                DepartureStatus::Boarding
            } else if en_route {
                DepartureStatus::EnRoute
            } else {
                DepartureStatus::Concluded
            };
            prop_assert_eq!(d.status_at(now), expected);
        }

        /// Status is monotone through the day: the sequence of statuses
        /// over increasing time never goes backwards in the lifecycle.
        #[test]
        fn status_progresses_forward(d in any_departure(), a in any_time(), b in any_time()) {
            fn rank(s: DepartureStatus) -> u8 {
                match s {
                    DepartureStatus::Scheduled => 0,
                    DepartureStatus::Boarding => 1,
                    DepartureStatus::EnRoute => 2,
                    DepartureStatus::Concluded => 3,
                }
            }
            let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(d.status_at(earlier)) <= rank(d.status_at(later)));
        }

        /// The departure minute itself always shows Boarding.
        #[test]
        fn departure_minute_is_boarding(d in any_departure()) {
            prop_assert_eq!(d.status_at(d.departure()), DepartureStatus::Boarding);
        }
    }
}
