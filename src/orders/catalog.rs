//! Fixed sample catalogs and generation constants
//!
//! Catalog order matters: the generator indexes into these slices with a
//! seeded random stream, so reordering entries changes every generated
//! dataset.

/// Seed for the dataset's random stream.
pub const DATASET_SEED: u32 = 42;

/// Number of records in the default dataset.
pub const DATASET_SIZE: usize = 137;

/// First order id; ids are `#CM<ID_BASE + index>`.
pub const ID_BASE: usize = 9801;

/// Orders are spread over the last this-many days.
pub const MAX_AGE_DAYS: usize = 120;

pub const USERS: [&str; 10] = [
    "Natali Craig",
    "Kate Morrison",
    "Drew Cano",
    "Orlando Diggs",
    "Andi Lane",
    "Koray Okumus",
    "Alicia Keys",
    "Robert Fox",
    "Savannah Nguyen",
    "Jerome Bell",
];

pub const PROJECTS: [&str; 5] = [
    "Landing Page",
    "CRM Admin pages",
    "Client Project",
    "Admin Dashboard",
    "App Landing Page",
];

pub const ADDRESSES: [&str; 5] = [
    "Meadow Lane Oakland",
    "Larry San Francisco",
    "Bagwell Avenue Ocala",
    "Washburn Baton Rouge",
    "Nest Lane Olivette",
];

pub const AVATARS: [&str; 11] = [
    "/avatar-1.svg",
    "/avatar-2.svg",
    "/avatar-3.svg",
    "/avatar-4.svg",
    "/avatar-5.svg",
    "/avatar-6.svg",
    "/avatar-7.svg",
    "/avatar-8.svg",
    "/avatar-9.svg",
    "/avatar-10.svg",
    "/avatar-11.svg",
];
