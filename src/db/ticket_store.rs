use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::ticket::{
        SupportTicket, TicketDraft, TicketResponse, TicketResponseDraft, TicketStatus, TicketThread,
    },
};

/// Store for internal support tickets and their response threads
#[derive(Clone)]
pub struct TicketStore {
    pool: DbPool,
}

impl TicketStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: TicketDraft) -> Result<SupportTicket> {
        let result = sqlx::query("INSERT INTO support_tickets (subject, message) VALUES (?, ?)")
            .bind(&draft.subject)
            .bind(&draft.message)
            .execute(&self.pool)
            .await?;

        self.get(result.last_insert_rowid()).await
    }

    pub async fn get(&self, id: i64) -> Result<SupportTicket> {
        sqlx::query_as::<_, SupportTicket>("SELECT * FROM support_tickets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list(&self, status: Option<TicketStatus>) -> Result<Vec<SupportTicket>> {
        let tickets = match status {
            Some(status) => {
                sqlx::query_as::<_, SupportTicket>(
                    "SELECT * FROM support_tickets WHERE status = ? ORDER BY id DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SupportTicket>("SELECT * FROM support_tickets ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(tickets)
    }

    /// Ticket with its responses, oldest first
    pub async fn thread(&self, id: i64) -> Result<TicketThread> {
        let ticket = self.get(id).await?;
        let responses = sqlx::query_as::<_, TicketResponse>(
            "SELECT * FROM ticket_responses WHERE ticket_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(TicketThread { ticket, responses })
    }

    pub async fn respond(&self, ticket_id: i64, draft: TicketResponseDraft) -> Result<TicketResponse> {
        self.get(ticket_id).await?;

        let result =
            sqlx::query("INSERT INTO ticket_responses (ticket_id, message) VALUES (?, ?)")
                .bind(ticket_id)
                .bind(&draft.message)
                .execute(&self.pool)
                .await?;

        let response =
            sqlx::query_as::<_, TicketResponse>("SELECT * FROM ticket_responses WHERE id = ?")
                .bind(result.last_insert_rowid())
                .fetch_one(&self.pool)
                .await?;

        Ok(response)
    }

    pub async fn set_status(&self, id: i64, status: TicketStatus) -> Result<SupportTicket> {
        let result = sqlx::query("UPDATE support_tickets SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        self.get(id).await
    }

    /// Delete a ticket; responses go with it via the FK cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM support_tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
