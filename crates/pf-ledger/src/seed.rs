//! Fixed seed snapshot every new tenant starts from.
//!
//! Ids are stable so the dashboard and tests can address seeded records
//! directly. Timestamps are relative to the moment the tenant materializes.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::json;

use pf_core::entities::{
    Approval, Collection, Employee, Region, Transaction, Wallet, WebhookEvent,
};
use pf_core::enums::{
    ApprovalStatus, ApprovalType, CollectionStatus, DeliveryStatus, EmployeeStatus,
    RegionStatus, TransactionStatus,
};

use crate::table::Table;
use crate::tenant::TenantLedger;

/// Seeded region that starts `SUSPENDED`.
pub const SUSPENDED_REGION_ID: &str = "REG-SG01";

/// Seeded approval that starts `PENDING`.
pub const PENDING_APPROVAL_ID: &str = "APP-0001";

/// Build a fresh copy of the seed snapshot.
#[must_use]
pub fn snapshot() -> TenantLedger {
    let now = Utc::now();
    TenantLedger {
        regions: Table::from_rows(regions()),
        approvals: Table::from_rows(approvals(now)),
        transactions: Table::from_rows(transactions(now)),
        webhooks: Table::from_rows(webhooks(now)),
        employees: Table::from_rows(employees()),
        wallets: Table::from_rows(wallets()),
        collections: Table::from_rows(collections(now.date_naive())),
        partnerships: Table::default(),
    }
}

fn region(
    id: &str,
    name: &str,
    code: &str,
    currency: &str,
    rails: &[&str],
    liquidity: f64,
    status: RegionStatus,
) -> Region {
    Region {
        id: id.into(),
        name: name.into(),
        code: code.into(),
        currency: currency.into(),
        status,
        rails: rails.iter().map(|r| (*r).to_string()).collect(),
        liquidity,
    }
}

fn regions() -> Vec<Region> {
    vec![
        region(
            "REG-NA01",
            "North America",
            "NA",
            "USD",
            &["ACH", "FEDWIRE", "RTP"],
            4_250_000.0,
            RegionStatus::Active,
        ),
        region(
            "REG-EU01",
            "European Union",
            "EU",
            "EUR",
            &["SEPA", "SEPA_INSTANT", "SWIFT"],
            3_180_000.0,
            RegionStatus::Active,
        ),
        region(
            "REG-UK01",
            "United Kingdom",
            "UK",
            "GBP",
            &["FPS", "BACS", "CHAPS"],
            1_920_000.0,
            RegionStatus::Active,
        ),
        region(
            "REG-MX01",
            "Mexico",
            "MX",
            "MXN",
            &["SPEI"],
            12_400_000.0,
            RegionStatus::Active,
        ),
        region(
            SUSPENDED_REGION_ID,
            "Singapore",
            "SG",
            "SGD",
            &["FAST", "PAYNOW"],
            860_000.0,
            RegionStatus::Suspended,
        ),
    ]
}

fn approvals(now: DateTime<Utc>) -> Vec<Approval> {
    vec![
        Approval {
            id: PENDING_APPROVAL_ID.into(),
            kind: ApprovalType::Payout,
            requester: "Dana Whitfield".into(),
            details: "Vendor payout 48,200.00 EUR to Helios Logistics GmbH".into(),
            timestamp: now - Duration::minutes(25),
            status: ApprovalStatus::Pending,
        },
        Approval {
            id: "APP-0002".into(),
            kind: ApprovalType::BankAccount,
            requester: "Marcus Oyelaran".into(),
            details: "Add settlement account at Banorte (MXN)".into(),
            timestamp: now - Duration::hours(3),
            status: ApprovalStatus::Pending,
        },
        Approval {
            id: "APP-0003".into(),
            kind: ApprovalType::PayrollRun,
            requester: "Priya Natarajan".into(),
            details: "Monthly payroll run, 6 employees, 4 currencies".into(),
            timestamp: now - Duration::days(1),
            status: ApprovalStatus::Approved,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    reference: &str,
    amount: f64,
    currency: &str,
    counterparty: &str,
    corridor: &str,
    status: TransactionStatus,
    timestamp: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: id.into(),
        reference: reference.into(),
        amount,
        currency: currency.into(),
        counterparty: counterparty.into(),
        corridor: Some(corridor.into()),
        status,
        timestamp,
    }
}

fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        transaction(
            "TXN-0001",
            "INV-2291",
            12_500.0,
            "USD",
            "Northwind Traders",
            "US-MX",
            TransactionStatus::Processing,
            now - Duration::minutes(12),
        ),
        transaction(
            "TXN-0002",
            "INV-2288",
            8_740.5,
            "EUR",
            "Helios Logistics GmbH",
            "EU-US",
            TransactionStatus::Completed,
            now - Duration::hours(2),
        ),
        transaction(
            "TXN-0003",
            "PAY-0193",
            2_310.0,
            "GBP",
            "Harbour & Finch Ltd",
            "UK-EU",
            TransactionStatus::Completed,
            now - Duration::hours(9),
        ),
        transaction(
            "TXN-0004",
            "INV-2270",
            96_000.0,
            "USD",
            "Kestrel Semiconductors",
            "US-SG",
            TransactionStatus::Failed,
            now - Duration::days(1),
        ),
        transaction(
            "TXN-0005",
            "REF-0042",
            415_300.0,
            "MXN",
            "Grupo Altamira",
            "MX-US",
            TransactionStatus::Pending,
            now - Duration::days(2),
        ),
    ]
}

fn webhooks(now: DateTime<Utc>) -> Vec<WebhookEvent> {
    vec![
        WebhookEvent {
            id: "EVT-0001".into(),
            event: "payment.completed".into(),
            endpoint: "https://hooks.payflow.example/erp".into(),
            status: DeliveryStatus::Delivered,
            payload: json!({ "transactionId": "TXN-0002", "amount": 8_740.5, "currency": "EUR" }),
            timestamp: now - Duration::hours(2),
        },
        WebhookEvent {
            id: "EVT-0002".into(),
            event: "payment.failed".into(),
            endpoint: "https://hooks.payflow.example/erp".into(),
            status: DeliveryStatus::Retrying,
            payload: json!({ "transactionId": "TXN-0004", "reason": "BENEFICIARY_BANK_REJECTED" }),
            timestamp: now - Duration::days(1),
        },
        WebhookEvent {
            id: "EVT-0003".into(),
            event: "approval.approved".into(),
            endpoint: "https://hooks.payflow.example/slack".into(),
            status: DeliveryStatus::Delivered,
            payload: json!({ "approvalId": "APP-0003" }),
            timestamp: now - Duration::days(1),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    role: &str,
    department: &str,
    country: &str,
    salary: f64,
    currency: &str,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        department: department.into(),
        country: country.into(),
        salary,
        currency: currency.into(),
        status,
    }
}

fn employees() -> Vec<Employee> {
    vec![
        employee(
            "EMP-0001",
            "Dana Whitfield",
            "Treasury Lead",
            "Finance",
            "US",
            14_500.0,
            "USD",
            EmployeeStatus::Active,
        ),
        employee(
            "EMP-0002",
            "Marcus Oyelaran",
            "Payments Engineer",
            "Engineering",
            "UK",
            9_200.0,
            "GBP",
            EmployeeStatus::Active,
        ),
        employee(
            "EMP-0003",
            "Priya Natarajan",
            "Payroll Specialist",
            "People",
            "SG",
            11_800.0,
            "SGD",
            EmployeeStatus::Active,
        ),
        employee(
            "EMP-0004",
            "Lucía Ferrer",
            "Compliance Analyst",
            "Risk",
            "MX",
            78_000.0,
            "MXN",
            EmployeeStatus::OnLeave,
        ),
        employee(
            "EMP-0005",
            "Jonas Becker",
            "Account Executive",
            "Sales",
            "DE",
            7_600.0,
            "EUR",
            EmployeeStatus::Active,
        ),
    ]
}

fn wallets() -> Vec<Wallet> {
    [
        ("WAL-0USD", "Operating USD", "USD", 1_250_000.0, "FEDWIRE"),
        ("WAL-0EUR", "Operating EUR", "EUR", 840_500.0, "SEPA"),
        ("WAL-0GBP", "Payroll GBP", "GBP", 210_000.0, "FPS"),
        ("WAL-USDC", "Stablecoin reserve", "USDC", 500_000.0, "SOLANA"),
    ]
    .into_iter()
    .map(|(id, label, currency, balance, network)| Wallet {
        id: id.into(),
        label: label.into(),
        currency: currency.into(),
        balance,
        network: network.into(),
    })
    .collect()
}

fn collections(today: NaiveDate) -> Vec<Collection> {
    vec![
        Collection {
            id: "COL-0001".into(),
            payer: "Northwind Traders".into(),
            amount: 22_000.0,
            currency: "USD".into(),
            due_date: today + Duration::days(7),
            status: CollectionStatus::Scheduled,
        },
        Collection {
            id: "COL-0002".into(),
            payer: "Harbour & Finch Ltd".into(),
            amount: 5_400.0,
            currency: "GBP".into(),
            due_date: today - Duration::days(3),
            status: CollectionStatus::Overdue,
        },
        Collection {
            id: "COL-0003".into(),
            payer: "Grupo Altamira".into(),
            amount: 180_000.0,
            currency: "MXN".into(),
            due_date: today - Duration::days(10),
            status: CollectionStatus::Collected,
        },
    ]
}
