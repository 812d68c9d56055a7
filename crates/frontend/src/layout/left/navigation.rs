//! Sidebar navigation table and the role filter applied to it.
//!
//! An entry is visible iff the user holds at least one of its roles.

use contracts::system::roles::{
    self, ADMIN, CASHIER, DRIVER, FINANCE, MANAGER, PURCHASING, SALES, STOCK_CLERK, SUPER_ADMIN,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub roles: &'static [&'static str],
    pub icon: &'static str,
    pub coming_soon: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

const ADMINS: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER];
const INVENTORY_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, STOCK_CLERK];
const PURCHASING_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, PURCHASING];
const RECEIVING_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, PURCHASING, STOCK_CLERK];
const PAYABLES_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, PURCHASING, FINANCE];
const SALES_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, SALES];
const DELIVERY_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, SALES, DRIVER];
const INVOICE_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, SALES, FINANCE];
const COUNTER_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, CASHIER];
const CUSTOMER_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, SALES, CASHIER];
const SALES_LEDGER_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, CASHIER, SALES, FINANCE];
const RECEIVABLES_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, CASHIER, FINANCE];
const REPORT_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN, MANAGER, FINANCE];
const USER_ADMIN_ROLES: &[&str] = &[SUPER_ADMIN, ADMIN];
const ROLE_ADMIN_ROLES: &[&str] = &[SUPER_ADMIN];

const fn item(
    name: &'static str,
    href: &'static str,
    roles: &'static [&'static str],
    icon: &'static str,
) -> NavItem {
    NavItem {
        name,
        href,
        roles,
        icon,
        coming_soon: false,
    }
}

const fn soon(
    name: &'static str,
    href: &'static str,
    roles: &'static [&'static str],
    icon: &'static str,
) -> NavItem {
    NavItem {
        coming_soon: true,
        ..item(name, href, roles, icon)
    }
}

pub fn navigation() -> Vec<NavGroup> {
    vec![
        NavGroup {
            id: "main",
            label: "Main",
            items: vec![
                item("Dashboard", "/dashboard", roles::ALL, "layout-dashboard"),
                soon("Point of Sale", "/pos", COUNTER_ROLES, "cash"),
            ],
        },
        NavGroup {
            id: "inventory",
            label: "Inventory",
            items: vec![
                soon("Inventory", "/inventory", INVENTORY_ROLES, "inventory"),
                soon("Warehouses", "/warehouses", INVENTORY_ROLES, "building"),
                soon("Stock Transfers", "/stock-transfers", INVENTORY_ROLES, "layers"),
            ],
        },
        NavGroup {
            id: "purchasing",
            label: "Purchasing",
            items: vec![
                item("Suppliers", "/suppliers", PURCHASING_ROLES, "suppliers"),
                item("Purchase Orders", "/purchase-orders", PURCHASING_ROLES, "purchases"),
                soon("Purchase Receipts", "/purchase-receipts", RECEIVING_ROLES, "package"),
                soon("Purchase Payments", "/purchase-payments", PAYABLES_ROLES, "payments"),
            ],
        },
        NavGroup {
            id: "sales",
            label: "Sales",
            items: vec![
                item("Sales Orders", "/sales-orders", SALES_ROLES, "orders"),
                soon("Delivery Orders", "/delivery-orders", DELIVERY_ROLES, "truck"),
                soon("Sales Invoices", "/sales-invoices", INVOICE_ROLES, "invoices"),
                soon("Delivery Routes", "/delivery-routes", DELIVERY_ROLES, "map"),
                soon("Customers", "/customers", CUSTOMER_ROLES, "customers"),
                item("Sales", "/sales", SALES_LEDGER_ROLES, "cash"),
                soon("Payment Receive", "/sales-payment-receive", RECEIVABLES_ROLES, "payments"),
            ],
        },
        NavGroup {
            id: "reports",
            label: "Reports",
            items: vec![soon("Reports", "/reports", REPORT_ROLES, "bar-chart")],
        },
        NavGroup {
            id: "administration",
            label: "Administration",
            items: vec![
                soon("Users", "/users", USER_ADMIN_ROLES, "users"),
                soon("Roles & Permissions", "/roles-permissions", ROLE_ADMIN_ROLES, "shield"),
            ],
        },
    ]
}

/// Keep the items whose roles intersect `user_roles`; groups left empty go too.
pub fn filter_navigation<S: AsRef<str>>(groups: Vec<NavGroup>, user_roles: &[S]) -> Vec<NavGroup> {
    groups
        .into_iter()
        .filter_map(|mut group| {
            group
                .items
                .retain(|item| roles::intersects(item.roles, user_roles));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

/// `true` when `path` is `href` or one of its sub-pages.
pub fn is_within(path: &str, href: &str) -> bool {
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Entry owning `path`: an exact match, or the entry whose section
/// contains it (`/suppliers/create` belongs to `/suppliers`).
pub fn find_item(path: &str) -> Option<NavItem> {
    navigation()
        .into_iter()
        .flat_map(|group| group.items)
        .filter(|item| is_within(path, item.href))
        .max_by_key(|item| item.href.len())
}

/// Route guard using the navigation rule. `/auth/*` pages are always open;
/// paths outside every entry's section are closed.
pub fn can_access<S: AsRef<str>>(path: &str, user_roles: &[S]) -> bool {
    if path.starts_with("/auth/") {
        return true;
    }
    find_item(path)
        .map(|item| roles::intersects(item.roles, user_roles))
        .unwrap_or(false)
}

/// First page the user may open, used after login.
pub fn landing_path<S: AsRef<str>>(user_roles: &[S]) -> Option<&'static str> {
    filter_navigation(navigation(), user_roles)
        .first()
        .and_then(|group| group.items.first())
        .map(|item| item.href)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_names(roles: &[&str]) -> Vec<&'static str> {
        filter_navigation(navigation(), roles)
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| i.name)
            .collect()
    }

    #[test]
    fn test_stock_clerk_menu() {
        let names = visible_names(&[STOCK_CLERK]);
        assert!(names.contains(&"Inventory"));
        assert!(names.contains(&"Warehouses"));
        assert!(names.contains(&"Dashboard"));
        assert!(!names.contains(&"Purchase Orders"));
        assert!(!names.contains(&"Suppliers"));
    }

    #[test]
    fn test_visibility_matches_role_intersection() {
        let role_sets: Vec<Vec<&str>> = std::iter::once(vec![])
            .chain(roles::ALL.iter().map(|r| vec![*r]))
            .chain([vec![CASHIER, FINANCE], vec![DRIVER, STOCK_CLERK], vec!["auditor"]])
            .collect();

        for held in &role_sets {
            let visible = visible_names(held);
            for item in navigation().into_iter().flat_map(|g| g.items) {
                let expected = item.roles.iter().any(|r| held.contains(r));
                assert_eq!(
                    visible.contains(&item.name),
                    expected,
                    "{} for roles {:?}",
                    item.name,
                    held
                );
            }
        }
    }

    #[test]
    fn test_no_roles_no_menu() {
        assert!(filter_navigation::<&str>(navigation(), &[]).is_empty());
    }

    #[test]
    fn test_declaration_order_kept() {
        let groups: Vec<&str> = filter_navigation(navigation(), &[ADMIN])
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(
            groups,
            vec!["main", "inventory", "purchasing", "sales", "reports", "administration"]
        );
        let sales = visible_names(&[SALES]);
        let orders = sales.iter().position(|n| *n == "Sales Orders").unwrap();
        let ledger = sales.iter().position(|n| *n == "Sales").unwrap();
        assert!(orders < ledger);
    }

    #[test]
    fn test_empty_groups_hidden() {
        let groups: Vec<&str> = filter_navigation(navigation(), &[DRIVER])
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(groups, vec!["main", "sales"]);
    }

    #[test]
    fn test_can_access() {
        assert!(can_access("/inventory", &[STOCK_CLERK]));
        assert!(!can_access("/purchase-orders", &[STOCK_CLERK]));
        assert!(can_access("/auth/login", &[] as &[&str]));
        assert!(!can_access("/unknown", &[SUPER_ADMIN]));
        assert!(can_access("/roles-permissions", &[SUPER_ADMIN]));
        assert!(!can_access("/roles-permissions", &[ADMIN]));
        assert!(can_access("/suppliers/create", &[PURCHASING]));
        assert!(!can_access("/suppliers/create", &[CASHIER]));
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/sales", "/sales"));
        assert!(is_within("/sales/12", "/sales"));
        assert!(!is_within("/sales-orders", "/sales"));
        assert!(!is_within("/dashboard", "/sales"));
    }

    #[test]
    fn test_find_item_by_section() {
        assert_eq!(find_item("/sales").map(|i| i.name), Some("Sales"));
        assert_eq!(find_item("/sales/12").map(|i| i.name), Some("Sales"));
        assert_eq!(find_item("/sales-orders/create").map(|i| i.name), Some("Sales Orders"));
        assert_eq!(find_item("/salesx"), None);
    }

    #[test]
    fn test_landing_path() {
        assert_eq!(landing_path(&[CASHIER]), Some("/dashboard"));
        assert_eq!(landing_path::<&str>(&[]), None);
    }

    #[test]
    fn test_hrefs_are_unique() {
        let mut hrefs: Vec<&str> = navigation()
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| i.href)
            .collect();
        let total = hrefs.len();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }
}
