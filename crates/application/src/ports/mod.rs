mod name_resolution_facility;

pub use name_resolution_facility::{AddressList, LookupHints, NameResolutionFacility};
