//! Consolidated expense metrics
//!
//! `net_expense_txns` measures value that actually left the tracked group:
//! outbound, classified, non-swap, non-internal-transfer transactions on
//! Internal accounts, restricted to a fixed allow-list of USD-pegged
//! stablecoins. `reported_actuals` is the expense-side counterpart, summed
//! over wallet line items.

use rust_decimal::Decimal;

use crate::models::{Account, Direction, Wallet};

/// USD-pegged stablecoins counted by the net-expense metric
pub const STABLECOINS: [&str; 6] = ["DAI", "USDC", "USDT", "USDS", "USDP", "GUSD"];

/// Whether a token symbol is on the stablecoin allow-list
/// (case-insensitive)
pub fn is_stablecoin(token: &str) -> bool {
    STABLECOINS.iter().any(|s| s.eq_ignore_ascii_case(token))
}

/// Sum of transaction amounts that left the tracked group
///
/// A transaction counts only when ALL hold: the owning account is Internal;
/// the direction is outflow; the flow type is classified and crosses the
/// group boundary (`External`, `TopUp`, `Return`; `Internal` movements and
/// `Swap` conversions never count, regardless of direction or size); and
/// the token is on the stablecoin allow-list. Unclassified transactions
/// never count.
pub fn net_expense_txns(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .filter(|account| account.is_internal())
        .flat_map(|account| &account.transactions)
        .filter(|txn| txn.direction == Direction::Outflow)
        .filter(|txn| txn.flow_type.is_some_and(|flow| flow.leaves_group()))
        .filter(|txn| is_stablecoin(&txn.amount.token))
        .map(|txn| txn.amount.value)
        .sum()
}

/// Sum of `actuals` across every line item in every wallet
///
/// The unit is assumed uniform across line items; the upstream producer
/// guarantees a single currency per deployment.
pub fn reported_actuals(wallets: &[Wallet]) -> Decimal {
    wallets
        .iter()
        .flat_map(|wallet| &wallet.line_items)
        .map(|item| item.actuals)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AccountId, AccountType, FlowType, LineItem, LineItemId, TokenAmount, Transaction,
    };
    use rust_decimal_macros::dec;

    fn account(account_type: AccountType) -> Account {
        Account::new(AccountId::new("a"), "0xAAA", "a", account_type)
    }

    fn txn(
        token: &str,
        value: Decimal,
        direction: Direction,
        flow_type: Option<FlowType>,
    ) -> Transaction {
        let mut txn = Transaction::new(
            "0xhash",
            TokenAmount::new(token, value),
            "2025-09-05T12:00:00Z".parse().unwrap(),
            direction,
        );
        txn.flow_type = flow_type;
        txn
    }

    #[test]
    fn test_is_stablecoin() {
        assert!(is_stablecoin("DAI"));
        assert!(is_stablecoin("usdc"));
        assert!(!is_stablecoin("ETH"));
        assert!(!is_stablecoin("MKR"));
    }

    #[test]
    fn test_swap_and_internal_outflows_count_zero() {
        let mut internal = account(AccountType::Internal);
        internal.transactions = vec![
            txn("DAI", dec!(5000), Direction::Outflow, Some(FlowType::Swap)),
            txn("DAI", dec!(300), Direction::Outflow, Some(FlowType::Internal)),
            txn("DAI", dec!(100), Direction::Inflow, Some(FlowType::TopUp)),
        ];
        assert_eq!(net_expense_txns(&[internal]), Decimal::ZERO);
    }

    #[test]
    fn test_mixed_outflows_sum_and_skip_non_stablecoins() {
        let mut internal = account(AccountType::Internal);
        internal.transactions = vec![
            txn("DAI", dec!(100), Direction::Outflow, Some(FlowType::External)),
            txn("USDC", dec!(50), Direction::Outflow, Some(FlowType::Return)),
            txn("USDT", dec!(25), Direction::Outflow, Some(FlowType::TopUp)),
            txn("ETH", dec!(10), Direction::Outflow, Some(FlowType::External)),
            txn("DAI", dec!(999), Direction::Inflow, Some(FlowType::External)),
        ];
        assert_eq!(net_expense_txns(&[internal]), dec!(175));
    }

    #[test]
    fn test_non_internal_accounts_never_contribute() {
        for account_type in [
            AccountType::Source,
            AccountType::Destination,
            AccountType::External,
        ] {
            let mut acc = account(account_type);
            acc.transactions = vec![txn(
                "DAI",
                dec!(100),
                Direction::Outflow,
                Some(FlowType::External),
            )];
            assert_eq!(net_expense_txns(&[acc]), Decimal::ZERO);
        }
    }

    #[test]
    fn test_unclassified_transactions_never_contribute() {
        let mut internal = account(AccountType::Internal);
        internal.transactions = vec![txn("DAI", dec!(100), Direction::Outflow, None)];
        assert_eq!(net_expense_txns(&[internal]), Decimal::ZERO);
    }

    #[test]
    fn test_reported_actuals_spans_wallets() {
        let mut wallet_a = Wallet::new("0x1", "A");
        let mut item = LineItem::new(LineItemId::new("a"), "Payroll", None);
        item.actuals = dec!(40);
        wallet_a.line_items.push(item);

        let mut wallet_b = Wallet::new("0x2", "B");
        let mut item = LineItem::new(LineItemId::new("b"), "Infra", None);
        item.actuals = dec!(10.5);
        wallet_b.line_items.push(item);

        assert_eq!(reported_actuals(&[wallet_a, wallet_b]), dec!(50.5));
        assert_eq!(reported_actuals(&[]), Decimal::ZERO);
    }
}
