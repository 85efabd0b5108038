//! The form shared by the add and edit transaction pages.

use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    Status,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::{Product, Transaction, TransactionPayload},
};

/// The fields submitted by the add and edit transaction forms.
///
/// The product and status are submitted by name, see [TransactionFormData::resolve_selection].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFormData {
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub amount: Option<String>,
    /// The name of the selected status.
    pub status: Option<String>,
    pub transaction_date: Option<String>,
    pub create_by: Option<String>,
}

impl TransactionFormData {
    /// Convert the form into a payload by looking up the product code for the
    /// selected product name and the status ID for the selected status name.
    ///
    /// A name that matches nothing leaves the product code or status missing,
    /// which validation then reports.
    pub fn resolve_selection(self, products: &[Product], statuses: &[Status]) -> TransactionPayload {
        let product_id = self.product_name.as_deref().and_then(|name| {
            products
                .iter()
                .find(|product| product.product_name == name)
                .map(|product| product.product_id.clone())
        });

        let status = self.status.as_deref().and_then(|name| {
            statuses
                .iter()
                .find(|status| status.name == name)
                .map(|status| status.id)
        });

        TransactionPayload {
            product_name: self.product_name,
            product_id,
            amount: self.amount,
            customer_name: self.customer_name,
            status,
            create_by: self.create_by,
            transaction_date: self.transaction_date,
        }
    }
}

/// The values the form fields start with.
#[derive(Debug, Default)]
pub struct TransactionFormDefaults<'a> {
    pub customer_name: Option<&'a str>,
    pub product_name: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub status_name: Option<&'a str>,
    pub transaction_date: Option<Date>,
    pub create_by: Option<&'a str>,
}

impl<'a> TransactionFormDefaults<'a> {
    /// Pre-fill the form with the current values of `transaction`.
    pub fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            customer_name: Some(&transaction.customer_name),
            product_name: Some(&transaction.product_name),
            amount: Some(&transaction.amount),
            status_name: transaction.status_name.as_deref(),
            transaction_date: date_input_value(&transaction.transaction_date),
            create_by: Some(&transaction.create_by),
        }
    }
}

/// Parse the leading `YYYY-MM-DD` of a stored transaction date for a date input.
///
/// Returns `None` for dates in any other format.
pub fn date_input_value(transaction_date: &str) -> Option<Date> {
    let date = transaction_date.get(..10)?;

    Date::parse(date, format_description!("[year]-[month]-[day]")).ok()
}

/// Today's date in the server's local time zone, or UTC if the local offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn transaction_form_fields(
    defaults: &TransactionFormDefaults<'_>,
    products: &[Product],
    statuses: &[Status],
    max_date: Date,
) -> Markup {
    html! {
        div
        {
            label for="customerName" class=(FORM_LABEL_STYLE) { "Customer Name" }

            input
                name="customerName"
                id="customerName"
                type="text"
                placeholder="Customer Name"
                value=[defaults.customer_name]
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="productName" class=(FORM_LABEL_STYLE) { "Product Name" }

            select name="productName" id="productName" class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select Product" }

                @for product in products {
                    option
                        value=(product.product_name)
                        selected[defaults.product_name == Some(product.product_name.as_str())]
                    {
                        (product.product_name)
                    }
                }
            }
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            input
                name="amount"
                id="amount"
                type="number"
                step="any"
                placeholder="0"
                value=[defaults.amount]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="status" class=(FORM_LABEL_STYLE) { "Status" }

            select name="status" id="status" class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select Status" }

                @for status in statuses {
                    option
                        value=(status.name)
                        selected[defaults.status_name == Some(status.name.as_str())]
                    {
                        (status.name)
                    }
                }
            }
        }

        div
        {
            label for="transactionDate" class=(FORM_LABEL_STYLE) { "Transaction Date" }

            input
                name="transactionDate"
                id="transactionDate"
                type="date"
                min="1900-01-01"
                max=(max_date)
                value=[defaults.transaction_date]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="createBy" class=(FORM_LABEL_STYLE) { "Created By" }

            input
                name="createBy"
                id="createBy"
                type="text"
                placeholder="Your name"
                value=[defaults.create_by]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
