use models_bizdesk::client::request::{CreateClientRequest, UpdateClientRequest};
use models_bizdesk::client::response::{
    ClientMutatedResponse, GetClientResponse, ListClientsResponse,
};
use models_bizdesk::client::{Address, Client, ClientRecord, ClientStatus, ClientSummary};
use models_bizdesk::dashboard::{
    ClientCounts, DashboardStatsResponse, FinancialSnapshot, MonthlyTrendPoint, ProjectCounts,
};
use models_bizdesk::document::request::{CreateDocumentRequest, UpdateDocumentRequest};
use models_bizdesk::document::response::{
    DocumentMutatedResponse, GetDocumentResponse, ListDocumentsResponse,
};
use models_bizdesk::document::{Document, DocumentCategory, RelatedTo};
use models_bizdesk::project::request::{
    CreateProjectRequest, CreateTaskRequest, UpdateProjectRequest, UpdateTaskRequest,
};
use models_bizdesk::project::response::{
    GetProjectResponse, ListProjectsResponse, ProjectMutatedResponse,
};
use models_bizdesk::project::{
    Project, ProjectDetail, ProjectPriority, ProjectRecord, ProjectStatus, ProjectSummary, Task,
    TaskPriority, TaskRecord, TaskStatus,
};
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use models_bizdesk::target::request::{CreateTargetRequest, UpdateTargetRequest};
use models_bizdesk::target::response::{
    GetTargetResponse, ListTargetsResponse, TargetMutatedResponse,
};
use models_bizdesk::target::{Target, TargetPeriod, TargetStatus, TargetType};
use models_bizdesk::transaction::request::{CreateTransactionRequest, UpdateTransactionRequest};
use models_bizdesk::transaction::response::{
    CategoryTotal, FinanceSummary, FinanceSummaryResponse, GetTransactionResponse,
    ListTransactionsResponse, TransactionMutatedResponse,
};
use models_bizdesk::transaction::{
    PaymentMethod, Transaction, TransactionDetail, TransactionStatus, TransactionType,
};
use models_bizdesk::user::UserRef;
use utoipa::OpenApi;

use crate::api::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health,
        crate::api::client::list_clients::handler,
        crate::api::client::get_client::handler,
        crate::api::client::create_client::handler,
        crate::api::client::update_client::handler,
        crate::api::client::delete_client::handler,
        crate::api::project::list_projects::handler,
        crate::api::project::get_project::handler,
        crate::api::project::create_project::handler,
        crate::api::project::update_project::handler,
        crate::api::project::delete_project::handler,
        crate::api::project::add_task::handler,
        crate::api::project::update_task::handler,
        crate::api::project::delete_task::handler,
        crate::api::finance::list_transactions::handler,
        crate::api::finance::get_transaction::handler,
        crate::api::finance::create_transaction::handler,
        crate::api::finance::update_transaction::handler,
        crate::api::finance::delete_transaction::handler,
        crate::api::finance::summary_stats::handler,
        crate::api::target::list_targets::handler,
        crate::api::target::get_target::handler,
        crate::api::target::create_target::handler,
        crate::api::target::update_target::handler,
        crate::api::target::delete_target::handler,
        crate::api::document::list_documents::handler,
        crate::api::document::get_document::handler,
        crate::api::document::create_document::handler,
        crate::api::document::update_document::handler,
        crate::api::document::delete_document::handler,
        crate::api::dashboard::stats::handler,
    ),
    components(schemas(
        HealthResponse,
        ErrorResponse,
        MessageResponse,
        UserRef,
        Address,
        Client,
        ClientRecord,
        ClientSummary,
        ClientStatus,
        CreateClientRequest,
        UpdateClientRequest,
        ListClientsResponse,
        GetClientResponse,
        ClientMutatedResponse,
        Project,
        ProjectDetail,
        ProjectRecord,
        ProjectSummary,
        ProjectStatus,
        ProjectPriority,
        Task,
        TaskRecord,
        TaskStatus,
        TaskPriority,
        CreateProjectRequest,
        UpdateProjectRequest,
        CreateTaskRequest,
        UpdateTaskRequest,
        ListProjectsResponse,
        GetProjectResponse,
        ProjectMutatedResponse,
        Transaction,
        TransactionDetail,
        TransactionType,
        TransactionStatus,
        PaymentMethod,
        CreateTransactionRequest,
        UpdateTransactionRequest,
        ListTransactionsResponse,
        GetTransactionResponse,
        TransactionMutatedResponse,
        FinanceSummary,
        FinanceSummaryResponse,
        CategoryTotal,
        Target,
        TargetType,
        TargetPeriod,
        TargetStatus,
        CreateTargetRequest,
        UpdateTargetRequest,
        ListTargetsResponse,
        GetTargetResponse,
        TargetMutatedResponse,
        Document,
        DocumentCategory,
        RelatedTo,
        CreateDocumentRequest,
        UpdateDocumentRequest,
        ListDocumentsResponse,
        GetDocumentResponse,
        DocumentMutatedResponse,
        DashboardStatsResponse,
        FinancialSnapshot,
        ClientCounts,
        ProjectCounts,
        MonthlyTrendPoint,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Client management"),
        (name = "projects", description = "Project and task management"),
        (name = "finance", description = "Transactions and financial summaries"),
        (name = "targets", description = "Business target tracking"),
        (name = "documents", description = "Document metadata records"),
        (name = "dashboard", description = "Aggregated dashboard statistics"),
    ),
    info(
        title = "Bizdesk Service API",
        description = "Small-business management API: clients, projects, finance, targets, documents and dashboard rollups",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub struct ApiDoc;
