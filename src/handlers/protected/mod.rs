// handlers/protected - session token and a valid admin record required
pub mod permissions;
pub mod whoami;

pub use permissions::{permission_check, permissions_list, roles_list};
pub use whoami::whoami;
