use std::collections::HashSet;
use std::sync::LazyLock;

pub const MIT: &str = "MIT";
pub const ISC: &str = "ISC";
pub const NEW_BSD: &str = "NewBSD";
pub const FREE_BSD: &str = "FreeBSD";
pub const APACHE_2_0: &str = "Apache-2.0";
pub const MPL_2_0: &str = "MPL-2.0";
pub const GPL_2_0: &str = "GPL-2.0";
pub const GPL_3_0: &str = "GPL-3.0";
pub const LGPL_2_1: &str = "LGPL-2.1";
pub const LGPL_3_0: &str = "LGPL-3.0";
pub const AGPL_3_0: &str = "AGPL-3.0";
pub const CDDL_1_0: &str = "CDDL-1.0";
pub const EPL_1_0: &str = "EPL-1.0";
pub const UNLICENSE: &str = "Unlicense";

/// Every license identifier the classifier can produce.
pub const KNOWN_LICENSES: &[&str] = &[
    MIT, ISC, NEW_BSD, FREE_BSD, APACHE_2_0, MPL_2_0, GPL_2_0, GPL_3_0, LGPL_2_1, LGPL_3_0,
    AGPL_3_0, CDDL_1_0, EPL_1_0, UNLICENSE,
];

static KNOWN_TABLE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_LICENSES.iter().copied().collect());

/// Whether `id` is exactly one of [`KNOWN_LICENSES`]. Case-sensitive.
pub fn is_known(id: &str) -> bool {
    KNOWN_TABLE.contains(id)
}
