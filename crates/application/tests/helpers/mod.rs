pub mod mock_facility;

pub use mock_facility::MockFacility;
