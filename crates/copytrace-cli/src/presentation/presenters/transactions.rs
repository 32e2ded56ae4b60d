use copytrace_engine::summarize_transactions;
use copytrace_types::{CopyTransaction, TransactionInfo};

use crate::presentation::formatters::{format_timestamp, solscan_tx_url};
use crate::presentation::view_models::{
    CommandResultViewModel, CopyTransactionViewModel, StatusBadge, TransactionSideViewModel,
    TransactionsViewModel,
};

pub const EMPTY_TRANSACTIONS_MESSAGE: &str =
    "No transactions were found where this wallet copied the leader.";

pub fn present_transactions(
    leader: String,
    follower: String,
    transactions: Vec<CopyTransaction>,
) -> CommandResultViewModel<TransactionsViewModel> {
    let summary = summarize_transactions(&transactions);

    let content = TransactionsViewModel {
        leader,
        follower,
        count: summary.count,
        last_copy_at: summary.last_copy_at.map(format_timestamp),
        average_delay_slots: summary.average_delay_slots,
        delays: summary.delays,
        transactions: transactions.into_iter().map(present_copy).collect(),
    };

    let badge = if content.count == 0 {
        StatusBadge::info(EMPTY_TRANSACTIONS_MESSAGE)
    } else {
        StatusBadge::success(format!("{} copied trades", content.count))
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

fn present_copy(tx: CopyTransaction) -> CopyTransactionViewModel {
    CopyTransactionViewModel {
        delay_class: tx.delay_class(),
        token_symbol: tx.token.symbol,
        token_name: tx.token.name,
        token_address: tx.token.address,
        delay_slots: tx.delay_slots,
        leader: present_side(tx.leader_transaction),
        follower: present_side(tx.follower_transaction),
    }
}

fn present_side(info: TransactionInfo) -> TransactionSideViewModel {
    TransactionSideViewModel {
        url: solscan_tx_url(&info.signature),
        slot: info.slot,
        timestamp: info.timestamp,
        signature: info.signature,
        amount: info.amount,
        usd_amount: info.usd_amount,
    }
}
