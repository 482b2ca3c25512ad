//! Static reference tables for the bank and investment comparison pages.
//!
//! Rates are the publicly quoted figures these institutions advertise;
//! they are informational, not live market data.

use once_cell::sync::Lazy;
use shared::{BankRate, InvestmentOption};

static BANKS: Lazy<Vec<BankRate>> = Lazy::new(|| {
    let rows = [
        ("Meezan Bank", "18% (Halal)", "Islamic", "Largest Islamic bank; halal profit with no hidden charges"),
        ("HBL", "20.5%", "Conventional", "Wide ATM network with mobile banking and loyalty rewards"),
        ("UBL", "19.5%", "Conventional", "Strong online banking and international cards"),
        ("Bank Alfalah", "19%", "Conventional", "Cashback offers and a capable digital wallet"),
        ("MCB", "19.5%", "Conventional", "Established network with investment plans and loan facility"),
        ("Faysal Bank", "17.5% (Halal)", "Islamic", "Islamic products with deposit protection"),
        ("JS Bank", "18.5%", "Conventional", "Digital-first bank with dedicated student accounts"),
        ("JazzCash", "13.5%", "Wallet", "Mobile wallet; bill payments and transfers, no bank account needed"),
        ("EasyPaisa", "15%", "Wallet", "Instant payments, utility bills and mobile top-up"),
    ];
    rows.iter()
        .map(|(name, rate, kind, description)| BankRate {
            name: name.to_string(),
            rate: rate.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
        })
        .collect()
});

static INVESTMENTS: Lazy<Vec<InvestmentOption>> = Lazy::new(|| {
    let rows = [
        (
            "National Savings Regular Income Certificate",
            "Very Low",
            "8.5%",
            "Government backed certificates with quarterly returns",
            "PKR 100,000",
            "6 months - 1 year",
            "High",
        ),
        (
            "Bank Fixed Deposits",
            "Very Low",
            "6-8%",
            "Safe bank deposits with guaranteed returns",
            "PKR 10,000",
            "3-12 months",
            "Medium",
        ),
        (
            "Money Market Funds",
            "Low",
            "5-7%",
            "Liquid funds investing in short-term securities",
            "PKR 5,000",
            "1-6 months",
            "Very High",
        ),
        (
            "Prize Bonds",
            "Very Low",
            "Variable",
            "Government bonds with prize draws",
            "PKR 100",
            "Flexible",
            "High",
        ),
        (
            "Mutual Funds (Equity)",
            "Medium",
            "12-18%",
            "Professionally managed equity portfolios",
            "PKR 5,000",
            "2-5 years",
            "Medium",
        ),
        (
            "Pakistan Investment Bonds (PIBs)",
            "Low",
            "10-13%",
            "Long-dated government paper with fixed coupons",
            "PKR 100,000",
            "3-10 years",
            "Medium",
        ),
        (
            "Gold Investment",
            "Medium",
            "10-15%",
            "Physical gold or gold-backed funds as an inflation hedge",
            "PKR 20,000",
            "2-7 years",
            "Medium",
        ),
        (
            "Stock Market (PSX)",
            "High",
            "15-25%",
            "Listed equities on the Pakistan Stock Exchange",
            "PKR 10,000",
            "7+ years",
            "High",
        ),
        (
            "Real Estate Investment",
            "Medium-High",
            "8-15%",
            "Plots and property; capital gains over long horizons",
            "PKR 1,000,000",
            "10+ years",
            "Low",
        ),
        (
            "Pension Funds (VPS)",
            "Medium",
            "11-16%",
            "Voluntary pension schemes with tax credits",
            "PKR 1,000",
            "20+ years",
            "Very Low",
        ),
    ];
    rows.iter()
        .map(|(name, risk, ret, description, min, duration, liquidity)| InvestmentOption {
            name: name.to_string(),
            risk: risk.to_string(),
            expected_return: ret.to_string(),
            description: description.to_string(),
            minimum_amount: min.to_string(),
            duration: duration.to_string(),
            liquidity: liquidity.to_string(),
        })
        .collect()
});

/// The bank comparison table.
pub fn banks() -> &'static [BankRate] {
    &BANKS
}

/// The investment comparison table.
pub fn investments() -> &'static [InvestmentOption] {
    &INVESTMENTS
}
