use super::{Desk, Listing};
use crate::domain::ClientError;
use crate::forms::{BookForm, BookUpdateForm, MembershipForm, MembershipUpdateForm, UserForm};
use crate::views;

pub async fn add_book(desk: &Desk, form: &BookForm) -> Result<String, ClientError> {
    let book = form.validate()?;
    let created = desk.authorized()?.add_book(&book).await?;
    tracing::info!("Book {} added (serial {})", created.book_id, book.serial_no);
    Ok(created.message)
}

pub async fn update_book(desk: &Desk, form: &BookUpdateForm) -> Result<String, ClientError> {
    let update = form.validate()?;
    let ack = desk.authorized()?.update_book(&update).await?;
    tracing::info!("Book {} updated", update.book_id);
    Ok(ack.message)
}

pub async fn add_membership(desk: &Desk, form: &MembershipForm) -> Result<String, ClientError> {
    let membership = form.validate()?;
    let created = desk.authorized()?.add_membership(&membership).await?;
    tracing::info!("Membership {} created", created.membership_number);
    Ok(format!(
        "Membership Created | Number: {}",
        created.membership_number
    ))
}

pub async fn update_membership(
    desk: &Desk,
    form: &MembershipUpdateForm,
) -> Result<String, ClientError> {
    let update = form.validate()?;
    let ack = desk.authorized()?.update_membership(&update).await?;
    tracing::info!(
        "Membership {} updated ({:?})",
        update.membership_number,
        update.action
    );
    Ok(ack.message)
}

pub async fn load_memberships(desk: &Desk) -> Result<Listing, ClientError> {
    let memberships = desk.authorized()?.list_memberships().await?;
    Ok(Listing::lines(views::membership_lines(&memberships)))
}

pub async fn manage_user(desk: &Desk, form: &UserForm) -> Result<String, ClientError> {
    let user = form.validate()?;
    let saved = desk.authorized()?.manage_user(&user).await?;
    tracing::info!("User {} saved (id {})", user.username, saved.user_id);
    Ok(saved.message)
}
