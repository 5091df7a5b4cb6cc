//! tor-arm-replace-torrc: setuid launcher for the torrc replacement helper.
//!
//! Install it like so:
//!
//!   chown root:debian-arm tor-arm-replace-torrc
//!   chmod 04750 tor-arm-replace-torrc
//!
//! Members of the group can then run the helper with the owner's identity.
//! Membership is effectively root: the helper rewrites Tor's configuration.

/// Apply process hardening measures early in startup.
#[cfg(not(debug_assertions))]
#[ctor::ctor]
fn pre_main_hardening() {
    torrc_process_hardening::pre_main_hardening();
}

fn main() -> ! {
    torrc_launcher::run_main()
}
