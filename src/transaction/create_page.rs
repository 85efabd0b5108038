//! Defines the page and form endpoint for adding a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use time::Date;

use crate::{
    Error, Status,
    db::lock_connection,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, loading_spinner},
    navigation::NavBar,
    status::get_all_statuses,
    transaction::{
        Product, TransactionState, create_transaction,
        form::{TransactionFormData, TransactionFormDefaults, today, transaction_form_fields},
        get_distinct_products,
    },
};

/// Renders the page for adding a transaction.
pub async fn get_new_transaction_page(
    State(state): State<TransactionState>,
) -> Result<Response, Error> {
    let (products, statuses) = {
        let connection = lock_connection(&state.db_connection)?;

        (
            get_distinct_products(&connection)?,
            get_all_statuses(&connection)?,
        )
    };

    Ok(new_transaction_view(&products, &statuses, today()).into_response())
}

/// Handle the add transaction form submission.
///
/// Redirects to the transaction list on success, otherwise responds with an
/// alert describing the error.
pub async fn create_transaction_form_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let created = lock_connection(&state.db_connection).and_then(|connection| {
        let products = get_distinct_products(&connection)?;
        let statuses = get_all_statuses(&connection)?;

        create_transaction(form.resolve_selection(&products, &statuses), &connection)
    });

    match created {
        Ok(created) => {
            tracing::debug!("Created transaction {}", created.transaction_id);
            (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::SEE_OTHER).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

fn new_transaction_view(products: &[Product], statuses: &[Status], max_date: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let fields = transaction_form_fields(
        &TransactionFormDefaults::default(),
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
                hx-post=(endpoints::TRANSACTIONS_FORM)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add New Transaction" }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    "Submit"
                }
            }
        }
    };

    base("Add Transaction", &content)
}

#[cfg(test)]
mod create_page_tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::OffsetDateTime;

    use crate::{
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input, assert_form_select,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_hx_redirect,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_document,
            parse_html_fragment, select_text,
        },
        transaction::{
            TransactionState, count_transactions, create_transaction_form_endpoint,
            core::test_fixtures::{get_test_connection, seeded_transaction},
            form::TransactionFormData,
            get_new_transaction_page, get_transaction, upsert_transaction,
        },
    };

    fn get_state() -> TransactionState {
        let connection = get_test_connection();
        upsert_transaction(&seeded_transaction(1, 0), &connection).unwrap();

        TransactionState::new(connection)
    }

    fn complete_form() -> TransactionFormData {
        TransactionFormData {
            customer_name: Some("Budi".to_owned()),
            product_name: Some("Keyboard".to_owned()),
            amount: Some("99000".to_owned()),
            status: Some("FAILED".to_owned()),
            transaction_date: Some("2024-03-01".to_owned()),
            create_by: Some("admin".to_owned()),
        }
    }

    #[tokio::test]
    async fn page_has_form_with_known_products_and_statuses() {
        let response = get_new_transaction_page(State(get_state())).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_FORM, "hx-post");
        assert_form_input(&form, "customerName", "text", "");
        assert_form_input(&form, "amount", "number", "");
        assert_form_input(&form, "transactionDate", "date", "");
        assert_form_input(&form, "createBy", "text", "");
        assert_form_select(&form, "productName", &["Keyboard"], None);
        assert_form_select(&form, "status", &["SUCCESS", "FAILED"], None);
        assert_form_submit_button_with_text(&form, "Submit");
    }

    #[tokio::test]
    async fn date_cannot_be_in_the_future() {
        let response = get_new_transaction_page(State(get_state())).await.unwrap();

        let html = parse_html_document(response).await;
        let max = html
            .select(&scraper::Selector::parse("input[name=transactionDate]").unwrap())
            .next()
            .and_then(|input| input.value().attr("max"))
            .expect("date input should have a max date")
            .to_owned();
        let utc_today = OffsetDateTime::now_utc().date();
        // The server may be up to a day ahead or behind UTC.
        assert!(
            [utc_today.previous_day(), Some(utc_today), utc_today.next_day()]
                .iter()
                .flatten()
                .any(|date| date.to_string() == max),
            "unexpected max date {max}"
        );
    }

    #[tokio::test]
    async fn submitting_form_creates_transaction_and_redirects() {
        let state = get_state();

        let response =
            create_transaction_form_endpoint(State(state.clone()), Form(complete_form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(2));
        let created = get_transaction(2, &connection).unwrap();
        assert_eq!(created.product_id, "P-001");
        assert_eq!(created.status, 1);
        assert_eq!(created.customer_name, "Budi");
    }

    #[tokio::test]
    async fn missing_fields_respond_with_alert() {
        let state = get_state();
        let form = TransactionFormData {
            amount: Some(String::new()),
            status: Some("PENDING".to_owned()),
            ..complete_form()
        };

        let response = create_transaction_form_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert!(
            select_text(&html, "div[role=alert] p")
                .contains(&"Missing required fields: amount, status".to_owned())
        );
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(1));
    }
}
