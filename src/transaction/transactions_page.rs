//! Defines the route handler for the page that lists every transaction as a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, status_badge,
    },
    navigation::NavBar,
    transaction::{Transaction, TransactionState, get_all_transactions},
};

/// Render the list of all transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionState>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let transactions = get_all_transactions(&connection)?;

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                div class="flex justify-between items-center mb-4"
                {
                    h1 class="text-3xl font-bold" { "Transaction Data" }

                    a
                        href=(endpoints::NEW_TRANSACTION_VIEW)
                        class=(format!("{BUTTON_PRIMARY_STYLE} max-w-32 text-center"))
                    {
                        "Add Data"
                    }
                }

                @if transactions.is_empty() {
                    p class="text-center text-gray-500 dark:text-gray-400" { "No transactions found." }
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Product Name" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Customer Name" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Transaction Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Action" }
                                }
                            }

                            tbody
                            {
                                @for transaction in transactions {
                                    (transaction_row(transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &content)
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let detail_url = format_endpoint(endpoints::TRANSACTION_VIEW, transaction.id);
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.id) }
            td class=(TABLE_CELL_STYLE) { (transaction.product_name) }
            td class=(format!("{TABLE_CELL_STYLE} text-right")) { (transaction.amount) }
            td class=(TABLE_CELL_STYLE) { (transaction.customer_name) }
            td class=(TABLE_CELL_STYLE)
            {
                (status_badge(transaction.status, transaction.status_name.as_deref()))
            }
            td class=(TABLE_CELL_STYLE) { (transaction.transaction_date) }
            td class=(format!("{TABLE_CELL_STYLE} space-x-2"))
            {
                a href=(detail_url) class=(LINK_STYLE) { "View Detail" }
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
            }
        }
    }
}
