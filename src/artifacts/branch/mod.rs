pub mod branch_name;
pub mod ref_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch compared against when `--main` is not given
pub const DEFAULT_MAIN_BRANCH: &str = "master";
