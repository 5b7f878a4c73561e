use hostcheck_application::ports::{AddressList, LookupHints, NameResolutionFacility};
use hostcheck_domain::{DomainError, FamilyPreference, RawAddress, RawFamily};
use std::ffi::{CStr, CString};
use std::mem::size_of;
use std::ptr;
use tracing::debug;

/// Name resolution through the C library's `getaddrinfo`.
///
/// Consults whatever the host is configured for (hosts file, nscd, DNS).
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolutionFacility for SystemResolver {
    fn lookup(&self, host: &str, hints: &LookupHints) -> Result<AddressList, DomainError> {
        let node = CString::new(host).map_err(|_| {
            DomainError::ResolutionFailed("Hostname contains a NUL byte".to_string())
        })?;
        let service = CString::new(hints.port.to_string())
            .map_err(|e| DomainError::ResolutionFailed(e.to_string()))?;

        let mut ai_hints: libc::addrinfo = unsafe { std::mem::zeroed() };
        ai_hints.ai_family = match hints.family {
            FamilyPreference::Any => libc::AF_UNSPEC,
            FamilyPreference::Ipv4 => libc::AF_INET,
            FamilyPreference::Ipv6 => libc::AF_INET6,
        };
        ai_hints.ai_socktype = libc::SOCK_STREAM;
        if hints.address_config_only {
            ai_hints.ai_flags = libc::AI_ADDRCONFIG;
        }

        let mut head: *mut libc::addrinfo = ptr::null_mut();
        let status =
            unsafe { libc::getaddrinfo(node.as_ptr(), service.as_ptr(), &ai_hints, &mut head) };

        if status != 0 {
            let message = gai_error_message(status);
            debug!(host, status, error = %message, "getaddrinfo failed");
            return Err(DomainError::ResolutionFailed(message));
        }

        Ok(Box::new(AddrInfoList { head, cursor: head }))
    }
}

fn gai_error_message(status: libc::c_int) -> String {
    if status == libc::EAI_SYSTEM {
        return std::io::Error::last_os_error().to_string();
    }
    // gai_strerror returns a pointer to static storage
    unsafe { CStr::from_ptr(libc::gai_strerror(status)) }
        .to_string_lossy()
        .into_owned()
}

/// Owns the list returned by `getaddrinfo`; freed on drop.
struct AddrInfoList {
    head: *mut libc::addrinfo,
    cursor: *const libc::addrinfo,
}

impl Iterator for AddrInfoList {
    type Item = RawAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_null() {
            return None;
        }
        // cursor points into the list owned by `head`, which outlives self
        let entry = unsafe { &*self.cursor };
        self.cursor = entry.ai_next;
        Some(read_entry(entry))
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.head.is_null() {
            unsafe { libc::freeaddrinfo(self.head) };
        }
    }
}

/// Copies the address bytes out of one entry. A socket address shorter than
/// its family requires yields no bytes.
fn read_entry(entry: &libc::addrinfo) -> RawAddress {
    let len = entry.ai_addrlen as usize;
    let addr = entry.ai_addr;

    match entry.ai_family {
        libc::AF_INET => {
            if addr.is_null() || len < size_of::<libc::sockaddr_in>() {
                return RawAddress::new(RawFamily::Inet, &[]);
            }
            let sin = unsafe { &*(addr as *const libc::sockaddr_in) };
            // s_addr is stored in network byte order
            RawAddress::new(RawFamily::Inet, &sin.sin_addr.s_addr.to_ne_bytes())
        }
        libc::AF_INET6 => {
            if addr.is_null() || len < size_of::<libc::sockaddr_in6>() {
                return RawAddress::new(RawFamily::Inet6, &[]);
            }
            let sin6 = unsafe { &*(addr as *const libc::sockaddr_in6) };
            RawAddress::new(RawFamily::Inet6, &sin6.sin6_addr.s6_addr)
        }
        other => RawAddress::new(RawFamily::Other(other), &[]),
    }
}
