#![allow(dead_code)]

use hostcheck_application::ports::{AddressList, LookupHints, NameResolutionFacility};
use hostcheck_domain::{DomainError, RawAddress, RawFamily};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory facility that counts how many address lists it handed out
/// and how many were dropped again.
#[derive(Clone, Default)]
pub struct MockFacility {
    entries: Arc<Mutex<Vec<RawAddress>>>,
    failure: Arc<Mutex<Option<String>>>,
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
    last_hints: Arc<Mutex<Option<LookupHints>>>,
}

impl MockFacility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<RawAddress>) -> Self {
        let facility = Self::new();
        *facility.entries.lock().unwrap() = entries;
        facility
    }

    pub fn failing(message: &str) -> Self {
        let facility = Self::new();
        *facility.failure.lock().unwrap() = Some(message.to_string());
        facility
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub fn last_hints(&self) -> Option<LookupHints> {
        *self.last_hints.lock().unwrap()
    }
}

struct TrackedList {
    entries: std::vec::IntoIter<RawAddress>,
    released: Arc<AtomicUsize>,
}

impl Iterator for TrackedList {
    type Item = RawAddress;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}

impl Drop for TrackedList {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl NameResolutionFacility for MockFacility {
    fn lookup(&self, _host: &str, hints: &LookupHints) -> Result<AddressList, DomainError> {
        *self.last_hints.lock().unwrap() = Some(*hints);

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(DomainError::ResolutionFailed(message));
        }

        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TrackedList {
            entries: self.entries.lock().unwrap().clone().into_iter(),
            released: self.released.clone(),
        }))
    }
}

pub fn v4(octets: [u8; 4]) -> RawAddress {
    RawAddress::new(RawFamily::Inet, &octets)
}

pub fn v6(octets: [u8; 16]) -> RawAddress {
    RawAddress::new(RawFamily::Inet6, &octets)
}
