//! Defines the page and form endpoint for editing an existing transaction.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use time::Date;

use crate::{
    Error, Status, TransactionId,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, loading_spinner},
    navigation::NavBar,
    status::get_all_statuses,
    transaction::{
        Product, Transaction, TransactionState,
        form::{TransactionFormData, TransactionFormDefaults, today, transaction_form_fields},
        get_distinct_products, get_transaction, update_transaction,
    },
};

/// Renders the edit form pre-filled with the transaction's current values.
pub async fn get_edit_transaction_page(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Response, Error> {
    let Ok(Path(transaction_id)) = transaction_id else {
        return Err(Error::NotFound);
    };

    let (transaction, products, statuses) = {
        let connection = lock_connection(&state.db_connection)?;

        (
            get_transaction(transaction_id, &connection)?,
            get_distinct_products(&connection)?,
            get_all_statuses(&connection)?,
        )
    };

    Ok(edit_transaction_view(&transaction, &products, &statuses, today()).into_response())
}

/// Handle the edit transaction form submission.
///
/// Redirects to the transaction list on success, otherwise responds with an
/// alert describing the error.
pub async fn update_transaction_form_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let Ok(Path(transaction_id)) = transaction_id else {
        return Error::NotFound.into_alert_response();
    };

    let updated = lock_connection(&state.db_connection).and_then(|connection| {
        let products = get_distinct_products(&connection)?;
        let statuses = get_all_statuses(&connection)?;

        update_transaction(
            transaction_id,
            form.resolve_selection(&products, &statuses),
            &connection,
        )
    });

    match updated {
        Ok(_) => (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn edit_transaction_view(
    transaction: &Transaction,
    products: &[Product],
    statuses: &[Status],
    max_date: Date,
) -> Markup {
    let edit_page = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let update_endpoint = format_endpoint(endpoints::TRANSACTION_FORM, transaction.id);
    let nav_bar = NavBar::new(&edit_page).into_html();
    let fields = transaction_form_fields(
        &TransactionFormDefaults::from_transaction(transaction),
        products,
        statuses,
        max_date,
    );
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    "Save Changes"
                }
            }
        }
    };

    base("Edit Transaction", &content)
}
