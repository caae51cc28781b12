use ccrm_domain::{Course, DomainError, Semester};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(course: &Course) -> u64 {
    let mut hasher = DefaultHasher::new();
    course.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn builder_snapshots_all_fields() {
    let course = Course::builder()
        .code("CS101")
        .title("Data Structures")
        .credits(4)
        .instructor("Dr. A")
        .semester(Semester::Fall)
        .department("CS")
        .build()
        .expect("valid course");

    assert_eq!(course.code(), "CS101");
    assert_eq!(course.title(), "Data Structures");
    assert_eq!(course.credits(), 4);
    assert_eq!(course.instructor(), "Dr. A");
    assert_eq!(course.semester(), Some(Semester::Fall));
    assert_eq!(course.department(), "CS");
}

#[test]
fn display_matches_catalog_listing_format() {
    let course = Course::builder()
        .code("CS101")
        .title("Data Structures")
        .credits(4)
        .instructor("Dr. A")
        .semester(Semester::Fall)
        .department("CS")
        .build()
        .unwrap();

    let listing = course.to_string();
    assert!(listing.contains("CS101 - Data Structures (4 credits)"), "got: {listing}");
    assert!(listing.contains("Semester: FALL"));
    assert!(listing.contains("Department: CS"));
}

#[test]
fn unset_fields_keep_permissive_defaults() {
    let course = Course::builder().code("MA201").build().unwrap();

    assert_eq!(course.credits(), 0);
    assert_eq!(course.title(), "");
    assert_eq!(course.instructor(), "");
    assert_eq!(course.semester(), None);
    assert!(course.to_string().contains("Semester: unscheduled"));
}

#[test]
fn empty_code_is_rejected_at_build() {
    let err = Course::builder().code("").title("Ghost Course").build().unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument { .. }));
}

#[test]
fn equality_and_hash_use_the_code_alone() {
    let a = Course::builder()
        .code("CS101")
        .title("Data Structures")
        .credits(4)
        .build()
        .unwrap();
    let b = Course::builder()
        .code("CS101")
        .title("Algorithms")
        .credits(3)
        .instructor("Dr. B")
        .build()
        .unwrap();
    let c = Course::builder().code("CS102").title("Data Structures").build().unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);

    // Reflexive, symmetric; transitivity follows from string equality.
    assert_eq!(a, a);
    assert_eq!(b, a);
}

#[test]
fn serde_roundtrip_preserves_every_attribute() {
    let course = Course::builder()
        .code("PH110")
        .title("Mechanics")
        .credits(3)
        .instructor("Dr. C")
        .semester(Semester::Spring)
        .department("Physics")
        .build()
        .unwrap();

    let json = serde_json::to_string(&course).unwrap();
    assert!(json.contains("\"SPRING\""));

    let back: Course = serde_json::from_str(&json).unwrap();
    assert_eq!(back.title(), "Mechanics");
    assert_eq!(back.semester(), Some(Semester::Spring));
}
