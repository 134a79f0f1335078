// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CourseCategory, CourseCategoryId, DomainError, LocationCatalog, ScheduleEntry, TimeRange,
    Venue, VenueId, VenueScheduleMap, Weekday,
};
use std::collections::BTreeMap;
use std::str::FromStr;

fn single_venue_schedule(venue: &str, category: &str) -> VenueScheduleMap {
    let entries: Vec<ScheduleEntry> = vec![ScheduleEntry::new(
        Weekday::Monday,
        TimeRange::from_str("18h00-19h00").unwrap(),
    )];
    BTreeMap::from([(
        VenueId::new(venue),
        BTreeMap::from([(CourseCategoryId::new(category), entries)]),
    )])
}

#[test]
fn test_builtin_catalog_is_consistent() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    assert!(catalog.check_consistency().is_ok());
}

#[test]
fn test_builtin_schedule_keys_are_offered_by_each_venue() {
    let catalog: LocationCatalog = LocationCatalog::builtin();

    for (venue_id, by_category) in catalog.schedule() {
        let venue: &Venue = catalog.venue(venue_id).unwrap();
        for category in by_category.keys() {
            assert!(
                venue.offers(category),
                "{venue_id} schedules {category} without offering it"
            );
        }
    }
}

#[test]
fn test_builtin_catalog_lists_six_active_venues() {
    let catalog: LocationCatalog = LocationCatalog::builtin();

    assert_eq!(catalog.venues().len(), 6);
    assert!(catalog.venues().iter().all(Venue::is_active));
}

#[test]
fn test_builtin_ulis_baby_3_has_single_saturday_slot() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let entries: &[ScheduleEntry] = catalog
        .schedule_for(&VenueId::new("ulis"), &CourseCategoryId::new("baby_3"))
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].weekday, Weekday::Saturday);
    assert_eq!(entries[0].time_range.to_string(), "09h30-10h20");
}

#[test]
fn test_builtin_schedule_keeps_insertion_order() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let entries: &[ScheduleEntry] = catalog
        .schedule_for(&VenueId::new("palaiseau"), &CourseCategoryId::new("enfants_6_9"))
        .unwrap();

    let days: Vec<Weekday> = entries.iter().map(|e| e.weekday).collect();
    assert_eq!(days, vec![Weekday::Sunday, Weekday::Friday]);
}

#[test]
fn test_schedule_for_unknown_venue_is_none() {
    let catalog: LocationCatalog = LocationCatalog::builtin();

    assert!(
        catalog
            .schedule_for(&VenueId::new("paris"), &CourseCategoryId::new("adultes"))
            .is_none()
    );
}

#[test]
fn test_new_rejects_schedule_for_unoffered_category() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![
            CourseCategory::new("adultes", "Adultes", "+16 ans"),
            CourseCategory::new("baby_3", "Baby Taekwondo 3 ans", "3 ans"),
        ],
        vec![Venue::new("ulis", "ATP Les Ulis", &["adultes"])],
        single_venue_schedule("ulis", "baby_3"),
    );

    assert!(matches!(
        result,
        Err(DomainError::ScheduleForUnofferedCourseCategory { .. })
    ));
}

#[test]
fn test_new_rejects_schedule_for_unknown_venue() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![CourseCategory::new("adultes", "Adultes", "+16 ans")],
        vec![Venue::new("ulis", "ATP Les Ulis", &["adultes"])],
        single_venue_schedule("paris", "adultes"),
    );

    assert_eq!(
        result,
        Err(DomainError::ScheduleForUnknownVenue(VenueId::new("paris")))
    );
}

#[test]
fn test_new_rejects_offered_category_missing_from_catalog() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![CourseCategory::new("adultes", "Adultes", "+16 ans")],
        vec![Venue::new("ulis", "ATP Les Ulis", &["adultes", "ninjas"])],
        BTreeMap::new(),
    );

    assert!(matches!(
        result,
        Err(DomainError::UnknownOfferedCourseCategory { .. })
    ));
}

#[test]
fn test_new_rejects_duplicate_venue() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![CourseCategory::new("adultes", "Adultes", "+16 ans")],
        vec![
            Venue::new("ulis", "ATP Les Ulis", &["adultes"]),
            Venue::new("ulis", "ATP Les Ulis bis", &["adultes"]),
        ],
        BTreeMap::new(),
    );

    assert_eq!(result, Err(DomainError::DuplicateVenue(VenueId::new("ulis"))));
}

#[test]
fn test_new_rejects_duplicate_course_category() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![
            CourseCategory::new("adultes", "Adultes", "+16 ans"),
            CourseCategory::new("adultes", "Adultes", "+18 ans"),
        ],
        Vec::new(),
        BTreeMap::new(),
    );

    assert!(matches!(
        result,
        Err(DomainError::DuplicateCourseCategory(_))
    ));
}

#[test]
fn test_new_accepts_inactive_venue_without_schedule() {
    let result: Result<LocationCatalog, DomainError> = LocationCatalog::new(
        vec![CourseCategory::new("adultes", "Adultes", "+16 ans")],
        vec![Venue::new("closed", "ATP Fermé", &[])],
        BTreeMap::new(),
    );

    assert!(result.is_ok());
}
