// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data: venues, course categories and weekly schedules.
//!
//! ## Invariants
//!
//! - Venue and course category identifiers are unique
//! - Every category a venue offers is defined by the catalog
//! - Every category scheduled at a venue is offered by that venue
//! - Schedule entries keep their insertion order, which is the display order

use crate::error::DomainError;
use crate::types::{CourseCategory, CourseCategoryId, ScheduleEntry, TimeRange, Venue, VenueId};
use crate::weekday::Weekday;
use std::collections::{BTreeMap, HashSet};
use time::macros::time;

/// Weekly schedules keyed by venue, then by course category.
pub type VenueScheduleMap = BTreeMap<VenueId, BTreeMap<CourseCategoryId, Vec<ScheduleEntry>>>;

/// The club's venues, course categories and weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    course_categories: Vec<CourseCategory>,
    venues: Vec<Venue>,
    schedule: VenueScheduleMap,
}

impl LocationCatalog {
    /// Creates a catalog after checking referential consistency.
    ///
    /// # Arguments
    ///
    /// * `course_categories` - Every category, in display order
    /// * `venues` - Every venue, in display order
    /// * `schedule` - Weekly schedule per venue and category
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A venue or category identifier is duplicated
    /// - A venue offers an undefined category
    /// - The schedule references an undefined venue
    /// - The schedule lists a category its venue does not offer
    pub fn new(
        course_categories: Vec<CourseCategory>,
        venues: Vec<Venue>,
        schedule: VenueScheduleMap,
    ) -> Result<Self, DomainError> {
        let catalog: Self = Self {
            course_categories,
            venues,
            schedule,
        };
        catalog.check_consistency()?;
        Ok(catalog)
    }

    /// Re-runs the referential consistency checks.
    ///
    /// # Errors
    ///
    /// See [`LocationCatalog::new`].
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        let mut category_ids: HashSet<&CourseCategoryId> = HashSet::new();
        for category in &self.course_categories {
            if !category_ids.insert(&category.id) {
                return Err(DomainError::DuplicateCourseCategory(category.id.clone()));
            }
        }

        let mut venue_ids: HashSet<&VenueId> = HashSet::new();
        for venue in &self.venues {
            if !venue_ids.insert(&venue.id) {
                return Err(DomainError::DuplicateVenue(venue.id.clone()));
            }
            if let Some(unknown) = venue
                .offered_course_categories
                .iter()
                .find(|c| !category_ids.contains(c))
            {
                return Err(DomainError::UnknownOfferedCourseCategory {
                    venue: venue.id.clone(),
                    course_category: unknown.clone(),
                });
            }
        }

        for (venue_id, by_category) in &self.schedule {
            let venue: &Venue = self
                .venue(venue_id)
                .ok_or_else(|| DomainError::ScheduleForUnknownVenue(venue_id.clone()))?;
            if let Some(unoffered) = by_category.keys().find(|c| !venue.offers(c)) {
                return Err(DomainError::ScheduleForUnofferedCourseCategory {
                    venue: venue_id.clone(),
                    course_category: unoffered.clone(),
                });
            }
        }

        Ok(())
    }

    /// All course categories, in display order.
    #[must_use]
    pub fn course_categories(&self) -> &[CourseCategory] {
        &self.course_categories
    }

    /// All venues, in display order.
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Looks up a venue.
    #[must_use]
    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| &v.id == id)
    }

    /// Looks up a course category.
    #[must_use]
    pub fn course_category(&self, id: &CourseCategoryId) -> Option<&CourseCategory> {
        self.course_categories.iter().find(|c| &c.id == id)
    }

    /// Returns the schedule of a category at a venue.
    ///
    /// `None` when the venue is unknown or does not schedule the category.
    #[must_use]
    pub fn schedule_for(
        &self,
        venue: &VenueId,
        course_category: &CourseCategoryId,
    ) -> Option<&[ScheduleEntry]> {
        self.schedule
            .get(venue)
            .and_then(|by_category| by_category.get(course_category))
            .map(Vec::as_slice)
    }

    /// Every venue's schedule.
    #[must_use]
    pub const fn schedule(&self) -> &VenueScheduleMap {
        &self.schedule
    }

    /// The club's built-in reference data.
    #[must_use]
    pub fn builtin() -> Self {
        use Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

        let course_categories: Vec<CourseCategory> = vec![
            CourseCategory::new("baby_3", "Baby Taekwondo 3 ans", "3 ans"),
            CourseCategory::new("baby_4", "Baby Taekwondo 4 ans", "4 ans"),
            CourseCategory::new("baby_3_5", "Baby Taekwondo", "3-5 ans"),
            CourseCategory::new("enfants_5_6", "Enfants", "5-6 ans"),
            CourseCategory::new("enfants_7_8", "Enfants", "7-8 ans"),
            CourseCategory::new("enfants_9_10", "Enfants", "9-10 ans"),
            CourseCategory::new("enfants_6_9", "Enfants", "6-9 ans"),
            CourseCategory::new("ados_10_17", "Adolescents", "10-17 ans"),
            CourseCategory::new("ados_11_16", "Adolescents", "11-16 ans"),
            CourseCategory::new("adultes", "Adultes", "+16 ans"),
        ];

        let venues: Vec<Venue> = vec![
            Venue::new(
                "villebon",
                "ATP Villebon-sur-Yvette",
                &["baby_3_5", "enfants_6_9", "ados_10_17"],
            ),
            Venue::new(
                "palaiseau",
                "ATP Palaiseau",
                &["baby_3_5", "enfants_6_9", "ados_10_17"],
            ),
            Venue::new("longjumeau", "ATP Longjumeau", &["ados_10_17"]),
            Venue::new(
                "saint-remy",
                "ATP Saint-Rémy-lès-Chevreuse",
                &["enfants_6_9"],
            ),
            Venue::new(
                "magny",
                "ATP Magny-les-Hameaux",
                &["enfants_6_9", "ados_10_17"],
            ),
            Venue::new(
                "ulis",
                "ATP Les Ulis",
                &[
                    "baby_3",
                    "baby_4",
                    "enfants_5_6",
                    "enfants_7_8",
                    "enfants_9_10",
                    "ados_11_16",
                    "adultes",
                ],
            ),
        ];

        // Groups that run at several venues on the same timetable.
        let weekend_kids: Vec<ScheduleEntry> = vec![
            entry(Sunday, TimeRange::from_literals(time!(8:00), time!(9:00))),
            entry(Friday, TimeRange::from_literals(time!(10:00), time!(11:00))),
        ];
        let evening_teens: Vec<ScheduleEntry> = vec![
            entry(Wednesday, TimeRange::from_literals(time!(18:00), time!(19:00))),
            entry(Thursday, TimeRange::from_literals(time!(18:00), time!(19:00))),
        ];

        let mut schedule: VenueScheduleMap = BTreeMap::new();
        schedule.insert(
            VenueId::new("villebon"),
            BTreeMap::from([
                (
                    CourseCategoryId::new("baby_3_5"),
                    vec![entry(Monday, TimeRange::from_literals(time!(10:00), time!(11:00)))],
                ),
                (
                    CourseCategoryId::new("enfants_6_9"),
                    vec![
                        entry(Tuesday, TimeRange::from_literals(time!(22:00), time!(23:00))),
                        entry(Thursday, TimeRange::from_literals(time!(17:00), time!(19:00))),
                    ],
                ),
                (
                    CourseCategoryId::new("ados_10_17"),
                    vec![
                        entry(Monday, TimeRange::from_literals(time!(18:00), time!(19:00))),
                        entry(Thursday, TimeRange::from_literals(time!(18:00), time!(19:00))),
                    ],
                ),
            ]),
        );
        schedule.insert(
            VenueId::new("palaiseau"),
            BTreeMap::from([
                (
                    CourseCategoryId::new("baby_3_5"),
                    vec![entry(Monday, TimeRange::from_literals(time!(17:00), time!(18:00)))],
                ),
                (CourseCategoryId::new("enfants_6_9"), weekend_kids.clone()),
                (CourseCategoryId::new("ados_10_17"), evening_teens.clone()),
            ]),
        );
        schedule.insert(
            VenueId::new("longjumeau"),
            BTreeMap::from([(CourseCategoryId::new("ados_10_17"), evening_teens.clone())]),
        );
        schedule.insert(
            VenueId::new("saint-remy"),
            BTreeMap::from([(CourseCategoryId::new("enfants_6_9"), weekend_kids.clone())]),
        );
        schedule.insert(
            VenueId::new("magny"),
            BTreeMap::from([
                (CourseCategoryId::new("enfants_6_9"), weekend_kids),
                (CourseCategoryId::new("ados_10_17"), evening_teens),
            ]),
        );
        schedule.insert(
            VenueId::new("ulis"),
            BTreeMap::from([
                (
                    CourseCategoryId::new("baby_3"),
                    vec![entry(Saturday, TimeRange::from_literals(time!(9:30), time!(10:20)))],
                ),
                (
                    CourseCategoryId::new("baby_4"),
                    vec![entry(Saturday, TimeRange::from_literals(time!(10:25), time!(11:20)))],
                ),
                (
                    CourseCategoryId::new("enfants_5_6"),
                    vec![
                        entry(Wednesday, TimeRange::from_literals(time!(17:15), time!(18:15))),
                        entry(Saturday, TimeRange::from_literals(time!(11:25), time!(12:25))),
                    ],
                ),
                (
                    CourseCategoryId::new("enfants_7_8"),
                    vec![
                        entry(Wednesday, TimeRange::from_literals(time!(18:15), time!(19:15))),
                        entry(Saturday, TimeRange::from_literals(time!(14:00), time!(15:00))),
                    ],
                ),
                (
                    CourseCategoryId::new("enfants_9_10"),
                    vec![
                        entry(Tuesday, TimeRange::from_literals(time!(18:15), time!(19:15))),
                        entry(Saturday, TimeRange::from_literals(time!(15:00), time!(16:00))),
                    ],
                ),
                (
                    CourseCategoryId::new("ados_11_16"),
                    vec![
                        entry(Wednesday, TimeRange::from_literals(time!(19:15), time!(20:15))),
                        entry(Saturday, TimeRange::from_literals(time!(15:00), time!(16:00))),
                    ],
                ),
                (
                    CourseCategoryId::new("adultes"),
                    vec![
                        entry(Tuesday, TimeRange::from_literals(time!(20:30), time!(22:00))),
                        entry(Thursday, TimeRange::from_literals(time!(20:30), time!(22:00))),
                    ],
                ),
            ]),
        );

        Self {
            course_categories,
            venues,
            schedule,
        }
    }
}

const fn entry(weekday: Weekday, time_range: TimeRange) -> ScheduleEntry {
    ScheduleEntry::new(weekday, time_range)
}
