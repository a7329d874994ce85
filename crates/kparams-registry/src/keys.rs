//! Named keys for every built-in parameter.
//!
//! Layout keys are grouped by the structure they describe, so a field offset
//! reads as `keys::ipc_port::IP_BITS` and a structure size as
//! `keys::ipc_port::SIZE`.

use crate::key::ParameterKey;

/// Unslid base address of the kernel image.
pub const KERNEL_BASE: ParameterKey = ParameterKey::StaticAddress("kernel_base");
/// Granularity of the kernel slide.
pub const KERNEL_SLIDE_STEP: ParameterKey = ParameterKey::System("kernel_slide_step");
/// Message size whose kmsg lands in the kmsg zone.
pub const MESSAGE_SIZE_FOR_KMSG_ZONE: ParameterKey =
    ParameterKey::System("message_size_for_kmsg_zone");
/// Element size of the kmsg zone.
pub const KMSG_ZONE_SIZE: ParameterKey = ParameterKey::System("kmsg_zone_size");
/// Maximum out-of-line ports in a single message.
pub const MAX_OOL_PORTS_PER_MESSAGE: ParameterKey =
    ParameterKey::System("max_ool_ports_per_message");
/// Amount of memory to churn to trigger zone garbage collection.
pub const GC_STEP: ParameterKey = ParameterKey::System("gc_step");

pub mod filedesc {
    use crate::key::ParameterKey;

    pub const FD_OFILES: ParameterKey = ParameterKey::Offset {
        structure: "filedesc",
        field: "fd_ofiles",
    };
}

pub mod fileglob {
    use crate::key::ParameterKey;

    pub const FG_OPS: ParameterKey = ParameterKey::Offset {
        structure: "fileglob",
        field: "fg_ops",
    };
    pub const FG_DATA: ParameterKey = ParameterKey::Offset {
        structure: "fileglob",
        field: "fg_data",
    };
}

pub mod fileproc {
    use crate::key::ParameterKey;

    pub const F_FGLOB: ParameterKey = ParameterKey::Offset {
        structure: "fileproc",
        field: "f_fglob",
    };
}

pub mod ipc_entry {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("ipc_entry");

    pub const IE_OBJECT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_entry",
        field: "ie_object",
    };
    pub const IE_BITS: ParameterKey = ParameterKey::Offset {
        structure: "ipc_entry",
        field: "ie_bits",
    };
    pub const IE_REQUEST: ParameterKey = ParameterKey::Offset {
        structure: "ipc_entry",
        field: "ie_request",
    };
}

pub mod ipc_port {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("ipc_port");
    pub const BLOCK_SIZE: ParameterKey = ParameterKey::BlockSize("ipc_port");
    pub const COUNT_PER_BLOCK: ParameterKey = ParameterKey::CountPerBlock("ipc_port");

    pub const IP_BITS: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_bits",
    };
    pub const IP_REFERENCES: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_references",
    };
    pub const WAITQ_FLAGS: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "waitq_flags",
    };
    pub const IMQ_MESSAGES: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "imq_messages",
    };
    pub const IMQ_MSGCOUNT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "imq_msgcount",
    };
    pub const IMQ_QLIMIT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "imq_qlimit",
    };
    pub const IP_RECEIVER: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_receiver",
    };
    pub const IP_KOBJECT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_kobject",
    };
    pub const IP_NSREQUEST: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_nsrequest",
    };
    pub const IP_REQUESTS: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_requests",
    };
    pub const IP_MSCOUNT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_mscount",
    };
    pub const IP_SRIGHTS: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port",
        field: "ip_srights",
    };
}

pub mod ipc_port_request {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("ipc_port_request");

    pub const IPR_SORIGHT: ParameterKey = ParameterKey::Offset {
        structure: "ipc_port_request",
        field: "ipr_soright",
    };
}

pub mod ipc_space {
    use crate::key::ParameterKey;

    pub const IS_TABLE_SIZE: ParameterKey = ParameterKey::Offset {
        structure: "ipc_space",
        field: "is_table_size",
    };
    pub const IS_TABLE: ParameterKey = ParameterKey::Offset {
        structure: "ipc_space",
        field: "is_table",
    };
}

pub mod ipc_voucher {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("ipc_voucher");
    pub const BLOCK_SIZE: ParameterKey = ParameterKey::BlockSize("ipc_voucher");
    pub const COUNT_PER_BLOCK: ParameterKey = ParameterKey::CountPerBlock("ipc_voucher");
}

pub mod pipe {
    use crate::key::ParameterKey;

    pub const PIPE_BUFFER: ParameterKey = ParameterKey::Offset {
        structure: "pipe",
        field: "pipe_buffer",
    };
}

pub mod proc {
    use crate::key::ParameterKey;

    pub const P_PID: ParameterKey = ParameterKey::Offset { structure: "proc", field: "p_pid" };
    pub const P_UCRED: ParameterKey = ParameterKey::Offset { structure: "proc", field: "p_ucred" };
    pub const P_FD: ParameterKey = ParameterKey::Offset { structure: "proc", field: "p_fd" };
}

pub mod ip6_pktopts {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("ip6_pktopts");

    pub const IP6PO_PKTINFO: ParameterKey = ParameterKey::Offset {
        structure: "ip6_pktopts",
        field: "ip6po_pktinfo",
    };
    pub const IP6PO_MINMTU: ParameterKey = ParameterKey::Offset {
        structure: "ip6_pktopts",
        field: "ip6po_minmtu",
    };
}

pub mod sysctl_oid {
    use crate::key::ParameterKey;

    pub const SIZE: ParameterKey = ParameterKey::Size("sysctl_oid");

    pub const OID_PARENT: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_parent",
    };
    pub const OID_LINK: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_link",
    };
    pub const OID_KIND: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_kind",
    };
    pub const OID_HANDLER: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_handler",
    };
    pub const OID_VERSION: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_version",
    };
    pub const OID_REFCNT: ParameterKey = ParameterKey::Offset {
        structure: "sysctl_oid",
        field: "oid_refcnt",
    };
}

pub mod task {
    use crate::key::ParameterKey;

    pub const LCK_MTX_TYPE: ParameterKey = ParameterKey::Offset {
        structure: "task",
        field: "lck_mtx_type",
    };
    pub const REF_COUNT: ParameterKey = ParameterKey::Offset {
        structure: "task",
        field: "ref_count",
    };
    pub const ACTIVE: ParameterKey = ParameterKey::Offset { structure: "task", field: "active" };
    pub const MAP: ParameterKey = ParameterKey::Offset { structure: "task", field: "map" };
    pub const ITK_SPACE: ParameterKey = ParameterKey::Offset {
        structure: "task",
        field: "itk_space",
    };
    pub const BSD_INFO: ParameterKey = ParameterKey::Offset {
        structure: "task",
        field: "bsd_info",
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Category;

    #[test]
    fn layout_key_text() {
        assert_eq!(ipc_port::IP_KOBJECT.to_string(), "OFFSET(ipc_port, ip_kobject)");
        assert_eq!(ipc_voucher::COUNT_PER_BLOCK.category(), Category::CountPerBlock);
    }

    #[test]
    fn system_key_categories() {
        assert_eq!(KERNEL_BASE.category(), Category::StaticAddress);
        assert_eq!(GC_STEP.category(), Category::System);
    }
}
