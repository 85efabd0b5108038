//! The page showing a single transaction.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, TransactionId,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base, status_badge},
    navigation::NavBar,
    transaction::{Transaction, TransactionState, get_transaction},
};

/// Render the details of one transaction, or the 404 page if it does not exist.
pub async fn get_transaction_page(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Response, Error> {
    // A path that is not a number cannot name a transaction.
    let Ok(Path(transaction_id)) = transaction_id else {
        return Err(Error::NotFound);
    };

    let connection = lock_connection(&state.db_connection)?;
    let transaction = get_transaction(transaction_id, &connection)?;

    Ok(transaction_detail_view(&transaction).into_response())
}

fn transaction_detail_view(transaction: &Transaction) -> Markup {
    let this_page = format_endpoint(endpoints::TRANSACTION_VIEW, transaction.id);
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let nav_bar = NavBar::new(&this_page).into_html();

    let details = [
        ("Product ID:", transaction.product_id.as_str()),
        ("Product Name:", transaction.product_name.as_str()),
        ("Created By:", transaction.create_by.as_str()),
        ("Created On:", transaction.create_on.as_str()),
    ];

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div
                class="w-full max-w-md p-6 space-y-4 bg-white rounded shadow
                dark:bg-gray-800 dark:border dark:border-gray-700"
            {
                h1 class="text-lg font-bold" { "Transaction Details" }

                div class="flex justify-between items-center gap-4"
                {
                    div class="flex flex-col"
                    {
                        span class="text-gray-600 dark:text-gray-400" { "Account" }
                        p id="customer-name" { (transaction.customer_name) }
                    }

                    p id="transaction-date" class="text-gray-600 dark:text-gray-400"
                    {
                        (transaction.transaction_date)
                    }
                }

                hr class="border-gray-200 dark:border-gray-700";

                div class="flex justify-between items-center gap-4"
                {
                    p id="amount" class="text-2xl font-semibold" { "Rp" (transaction.amount) }

                    (status_badge(transaction.status, transaction.status_name.as_deref()))
                }

                hr class="border-gray-200 dark:border-gray-700";

                dl class="flex flex-col gap-2"
                {
                    @for (label, value) in details {
                        div class="flex justify-between"
                        {
                            dt class="text-gray-600 dark:text-gray-400" { (label) }
                            dd { (value) }
                        }
                    }
                }

                div class="flex justify-between pt-2"
                {
                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Back" }
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                }
            }
        }
    };

    base("Transaction Details", &content)
}
