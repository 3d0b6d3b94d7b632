//! Scripted round-trip against the document backend.
//!
//! Stands in for the UI layer: wires both slices to stores, restores the
//! persisted session, then runs login → fetch → create → update → delete,
//! printing slice state after each step.
//!
//! Credentials come from `DOCDESK_USERNAME` / `DOCDESK_PASSWORD`; the
//! backend and token path honor `DOCDESK_BASE_URL` / `DOCDESK_TOKEN_PATH`.

use anyhow::{Context, bail};
use docdesk_api::{Credentials, DocsClient, DocumentDraft, FileTokenStore};
use docdesk_auth::{AuthAction, AuthEnvironment, AuthReducer, AuthState};
use docdesk_core::environment::{Clock, SystemClock};
use docdesk_documents::{
    DocumentsAction, DocumentsEnvironment, DocumentsReducer, DocumentsState,
};
use docdesk_runtime::Store;
use std::time::Duration;

const STEP_TIMEOUT: Duration = Duration::from_secs(15);

type Client = DocsClient<FileTokenStore>;
type DocumentsStore = Store<
    DocumentsState,
    DocumentsAction,
    DocumentsEnvironment<Client>,
    DocumentsReducer<Client>,
>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let tokens = FileTokenStore::from_env().context("locating token storage")?;
    let client = DocsClient::from_env(tokens.clone());
    tracing::info!(base_url = client.base_url(), "starting workbench");

    let auth = Store::new(
        AuthState::restore(&tokens),
        AuthReducer::new(),
        AuthEnvironment::new(client.clone(), tokens.clone()),
    );
    let documents = Store::new(
        DocumentsState::new(),
        DocumentsReducer::new(),
        DocumentsEnvironment::new(client.clone()),
    );

    // Login unless a persisted session already exists.
    if auth.state(|s| s.is_authenticated).await {
        println!("Resuming persisted session");
    } else {
        let username =
            std::env::var("DOCDESK_USERNAME").context("DOCDESK_USERNAME must be set to log in")?;
        let password =
            std::env::var("DOCDESK_PASSWORD").context("DOCDESK_PASSWORD must be set to log in")?;

        let mut handle = auth
            .send(AuthAction::LoginRequested {
                credentials: Credentials::new(username, password),
            })
            .await?;
        handle.wait_with_timeout(STEP_TIMEOUT).await?;

        let state = auth.state(Clone::clone).await;
        if let Some(error) = state.error {
            bail!("login failed: {error}");
        }
        println!("Logged in");
    }

    // Fetch the current collection.
    run_step(&documents, DocumentsAction::FetchRequested).await?;
    let names: Vec<String> = documents
        .state(|s| s.documents.iter().map(|d| d.document_name.clone()).collect())
        .await;
    println!("{} documents on the server:", names.len());
    for name in &names {
        println!("  - {name}");
    }

    // Create a document, then find its server-assigned id.
    let before: usize = documents.state(DocumentsState::count).await;
    run_step(
        &documents,
        DocumentsAction::CreateRequested {
            draft: sample_draft("Workbench round-trip"),
        },
    )
    .await?;
    let created = documents
        .state(|s| (s.count() > before).then(|| s.documents[s.count() - 1].clone()))
        .await
        .context("create did not append a document")?;
    println!("Created document {}", created.id);

    // Update it in place.
    let mut draft = created.to_draft();
    draft.document_status = "updated".to_string();
    run_step(
        &documents,
        DocumentsAction::UpdateRequested {
            id: created.id.clone(),
            draft,
        },
    )
    .await?;
    let status = documents
        .state(|s| s.get(&created.id).map(|d| d.document_status.clone()))
        .await
        .context("updated document vanished from the collection")?;
    println!("Updated document {} (status: {status})", created.id);

    // Delete it again.
    run_step(
        &documents,
        DocumentsAction::DeleteRequested {
            id: created.id.clone(),
        },
    )
    .await?;
    println!(
        "Deleted document {} ({} documents remain)",
        created.id,
        documents.state(DocumentsState::count).await
    );

    documents.shutdown(STEP_TIMEOUT).await?;
    auth.shutdown(STEP_TIMEOUT).await?;
    Ok(())
}

/// Send one action, wait for its effects, and fail on a recorded error.
async fn run_step(store: &DocumentsStore, action: DocumentsAction) -> anyhow::Result<()> {
    let label = action.label();
    let mut handle = store.send(action).await?;
    handle.wait_with_timeout(STEP_TIMEOUT).await?;

    if let Some(error) = store.state(|s| s.error.clone()).await {
        bail!("{label} failed: {error}");
    }
    Ok(())
}

/// A complete draft stamped with the current time.
fn sample_draft(name: &str) -> DocumentDraft {
    let now = SystemClock.now();
    DocumentDraft {
        company_sig_date: now,
        company_signature_name: "Docdesk Workbench".to_string(),
        document_name: name.to_string(),
        document_status: "draft".to_string(),
        document_type: "demo".to_string(),
        employee_number: "0000".to_string(),
        employee_sig_date: now,
        employee_signature_name: "Workbench Bot".to_string(),
    }
}
