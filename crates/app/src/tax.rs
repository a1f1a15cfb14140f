use std::path::{Path, PathBuf};

use chrono::Utc;

use flipstock_inventory::{Expense, Sale, Snapshot};
use flipstock_metrics::{tax_report, TaxReportData};
use flipstock_report::{export_tax_report, ReportError};
use flipstock_store::ItemStore;

/// Tax report view state over an item store.
///
/// Sold-item figures come from the store snapshot; sale and expense lists are
/// owned by the caller and fed in explicitly. The two are never reconciled.
#[derive(Debug)]
pub struct TaxReportView<S> {
    store: S,
    snapshot: Snapshot,
    sales: Vec<Sale>,
    expenses: Vec<Expense>,
    report: TaxReportData,
    error: Option<String>,
}

impl<S: ItemStore> TaxReportView<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Snapshot::default(),
            sales: Vec::new(),
            expenses: Vec::new(),
            report: TaxReportData::default(),
            error: None,
        }
    }

    /// Replace the caller-supplied sale list and recompute from the current
    /// snapshot.
    pub fn set_sales(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
        self.recompute();
    }

    /// Replace the caller-supplied expense list and recompute from the
    /// current snapshot.
    pub fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.recompute();
    }

    /// Pull a fresh snapshot and recompute the report.
    ///
    /// On failure the previous report is kept and a single user-visible error
    /// message is recorded.
    pub async fn refresh(&mut self) {
        match self.store.list_all().await {
            Ok(items) => {
                self.snapshot = Snapshot::from(items);
                self.recompute();
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load report data");
                self.error = Some("Failed to load report data".to_string());
            }
        }
    }

    /// Write the current report as `tax-report-<epoch-millis>.txt` under
    /// `dir`.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        export_tax_report(dir, &self.report, Utc::now())
    }

    pub fn report(&self) -> &TaxReportData {
        &self.report
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn recompute(&mut self) {
        self.report = tax_report(self.snapshot.items(), &self.sales, &self.expenses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flipstock_inventory::{ItemPatch, NewItem};
    use flipstock_store::InMemoryItemStore;
    use rust_decimal_macros::dec;

    async fn seeded_store() -> InMemoryItemStore {
        let store = InMemoryItemStore::new();
        let sold = store
            .create(NewItem::new("lamp", dec!(10), dec!(25)).unwrap())
            .await
            .unwrap();
        store
            .create(NewItem::new("chair", dec!(5), dec!(99)).unwrap())
            .await
            .unwrap();
        store.update(sold.id, ItemPatch::sold()).await.unwrap();
        store
    }

    fn sale() -> Sale {
        Sale {
            date: Utc::now(),
            sale_price: dec!(25),
            profit: dec!(15),
            fees: Some(dec!(2)),
            shipping_paid: Some(dec!(3)),
            item_id: None,
        }
    }

    #[tokio::test]
    async fn refresh_computes_the_report_from_store_and_caller_lists() {
        let mut view = TaxReportView::new(seeded_store().await);
        view.set_sales(vec![sale()]);
        view.set_expenses(vec![
            Expense::new(Some("ads"), dec!(10)),
            Expense::new(None, dec!(5)),
        ]);
        view.refresh().await;

        let report = view.report();
        assert_eq!(report.gross_receipts, dec!(25));
        assert_eq!(report.cogs, dec!(10));
        assert_eq!(report.total_expenses, dec!(15));
        assert_eq!(report.net_profit, dec!(-5));
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn changing_expenses_recomputes_without_a_new_fetch() {
        let mut view = TaxReportView::new(seeded_store().await);
        view.refresh().await;
        assert_eq!(view.report().total_expenses, dec!(0));

        view.set_expenses(vec![Expense::new(Some("ads"), dec!(7))]);
        assert_eq!(view.report().total_expenses, dec!(7));
        assert_eq!(view.report().gross_receipts, dec!(25));
    }

    #[tokio::test]
    async fn download_writes_the_report_file() {
        let mut view = TaxReportView::new(seeded_store().await);
        view.set_sales(vec![sale()]);
        view.refresh().await;

        let dir = tempfile::tempdir().unwrap();
        let path = view.download(dir.path()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("TAX REPORT - "));
        assert!(text.contains("Gross Receipts: $25.00"));
        assert!(text.contains("Platform Fees: $2.00"));
    }
}
