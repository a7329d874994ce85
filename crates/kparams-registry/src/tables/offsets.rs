//! Structure layout offsets.
//!
//! Field offsets and structure sizes follow the kernel build, so they are
//! keyed on the build alone. Zone block sizes follow the SoC's page size
//! and are keyed on the device list as well. A recognized platform matches
//! one rule of each kind.

use crate::error::Result;
use crate::keys::*;
use crate::rule::{Rule, RuleTable};
use crate::store::ParameterStore;

/// Minimum number of offset rules that must fire for a platform to count as
/// recognized.
pub const MIN_OFFSETS: usize = 2;

/// Devices sharing the A9 zone layout.
const A9_DEVICES: &str = "iPhone8,1 iPhone8,2 iPhone8,4";

fn layouts_16e227(store: &mut ParameterStore) -> Result<()> {
    store.set(filedesc::FD_OFILES, 0);

    store.set(fileglob::FG_OPS, 0x28);
    store.set(fileglob::FG_DATA, 0x38);

    store.set(fileproc::F_FGLOB, 8);

    store.set(ipc_entry::SIZE, 0x18);
    store.set(ipc_entry::IE_OBJECT, 0);
    store.set(ipc_entry::IE_BITS, 8);
    store.set(ipc_entry::IE_REQUEST, 16);

    store.set(ipc_port::SIZE, 0xa8);
    store.set(ipc_port::IP_BITS, 0);
    store.set(ipc_port::IP_REFERENCES, 4);
    store.set(ipc_port::WAITQ_FLAGS, 24);
    store.set(ipc_port::IMQ_MESSAGES, 64);
    store.set(ipc_port::IMQ_MSGCOUNT, 80);
    store.set(ipc_port::IMQ_QLIMIT, 82);
    store.set(ipc_port::IP_RECEIVER, 96);
    store.set(ipc_port::IP_KOBJECT, 104);
    store.set(ipc_port::IP_NSREQUEST, 112);
    store.set(ipc_port::IP_REQUESTS, 128);
    store.set(ipc_port::IP_MSCOUNT, 156);
    store.set(ipc_port::IP_SRIGHTS, 160);

    store.set(ipc_port_request::SIZE, 0x10);
    store.set(ipc_port_request::IPR_SORIGHT, 0);

    store.set(ipc_space::IS_TABLE_SIZE, 0x14);
    store.set(ipc_space::IS_TABLE, 0x20);

    store.set(ipc_voucher::SIZE, 0x50);

    store.set(pipe::PIPE_BUFFER, 0x10);

    store.set(proc::P_PID, 0x60);
    store.set(proc::P_UCRED, 0xf8);
    store.set(proc::P_FD, 0x100);

    store.set(ip6_pktopts::SIZE, 192);
    store.set(ip6_pktopts::IP6PO_PKTINFO, 16);
    store.set(ip6_pktopts::IP6PO_MINMTU, 180);

    store.set(sysctl_oid::SIZE, 0x50);
    store.set(sysctl_oid::OID_PARENT, 0x0);
    store.set(sysctl_oid::OID_LINK, 0x8);
    store.set(sysctl_oid::OID_KIND, 0x14);
    store.set(sysctl_oid::OID_HANDLER, 0x30);
    store.set(sysctl_oid::OID_VERSION, 0x48);
    store.set(sysctl_oid::OID_REFCNT, 0x4c);

    store.set(task::LCK_MTX_TYPE, 0xb);
    store.set(task::REF_COUNT, 0x10);
    store.set(task::ACTIVE, 0x14);
    store.set(task::MAP, 0x20);
    store.set(task::ITK_SPACE, 0x300);
    store.set(task::BSD_INFO, 0x358);
    Ok(())
}

fn zones_a9(store: &mut ParameterStore) -> Result<()> {
    store.set(ipc_port::BLOCK_SIZE, 0x4000);
    store.set(ipc_voucher::BLOCK_SIZE, 0x4000);
    Ok(())
}

/// Offset rules by platform.
pub fn table() -> RuleTable {
    RuleTable::new("offsets")
        .rule(Rule::new("*", "16E227", "layouts_16e227", layouts_16e227))
        .rule(Rule::new(A9_DEVICES, "16E227", "zones_a9", zones_a9))
        .with_quorum(MIN_OFFSETS)
}
