//! Role names issued by the POS API.

pub const SUPER_ADMIN: &str = "super-admin";
pub const ADMIN: &str = "admin";
pub const MANAGER: &str = "manager";
pub const CASHIER: &str = "cashier";
pub const STOCK_CLERK: &str = "stock-clerk";
pub const PURCHASING: &str = "purchasing";
pub const SALES: &str = "sales";
pub const FINANCE: &str = "finance";
pub const DRIVER: &str = "driver";

pub const ALL: &[&str] = &[
    SUPER_ADMIN,
    ADMIN,
    MANAGER,
    CASHIER,
    STOCK_CLERK,
    PURCHASING,
    SALES,
    FINANCE,
    DRIVER,
];

/// True when the two role sets share at least one role.
pub fn intersects<A: AsRef<str>, B: AsRef<str>>(allowed: &[A], held: &[B]) -> bool {
    allowed
        .iter()
        .any(|a| held.iter().any(|h| h.as_ref() == a.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        assert!(intersects(&[ADMIN, MANAGER], &["manager".to_string()]));
        assert!(!intersects(&[ADMIN], &["cashier"]));
        assert!(!intersects::<&str, &str>(&[ADMIN], &[]));
        assert!(!intersects::<&str, &str>(&[], &[ADMIN]));
    }
}
