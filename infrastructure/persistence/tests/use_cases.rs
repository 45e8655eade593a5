//! Application use cases wired to the PostgreSQL sessions and the tracing logger.

use std::sync::Arc;

use sqlx::PgPool;

use business::application::item::add::AddItemUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::item_list::create::CreateItemListUseCaseImpl;
use business::application::item_list::delete::DeleteItemListUseCaseImpl;
use business::application::item_picture::attach::AttachItemPictureUseCaseImpl;
use business::application::shopping_user::delete::DeleteShoppingUserUseCaseImpl;
use business::application::shopping_user::get_overview::GetShoppingUserOverviewUseCaseImpl;
use business::application::shopping_user::register::RegisterShoppingUserUseCaseImpl;
use business::domain::item::errors::ItemError;
use business::domain::item::use_cases::add::{AddItemParams, AddItemUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::item_list::use_cases::create::{CreateItemListParams, CreateItemListUseCase};
use business::domain::item_list::use_cases::delete::{DeleteItemListParams, DeleteItemListUseCase};
use business::domain::item_picture::errors::ItemPictureError;
use business::domain::item_picture::use_cases::attach::{
    AttachItemPictureParams, AttachItemPictureUseCase,
};
use business::domain::logger::Logger;
use business::domain::session::SessionFactory;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_user::errors::ShoppingUserError;
use business::domain::shopping_user::use_cases::delete::{
    DeleteShoppingUserParams, DeleteShoppingUserUseCase,
};
use business::domain::shopping_user::use_cases::get_overview::{
    GetShoppingUserOverviewParams, GetShoppingUserOverviewUseCase,
};
use business::domain::shopping_user::use_cases::register::RegisterShoppingUserUseCase;
use logger::{TracingLogger, init_tracing};
use persistence::PgSessionFactory;

async fn wiring(pool: PgPool) -> (Arc<dyn SessionFactory>, Arc<dyn Logger>) {
    init_tracing("debug");
    let sessions = PgSessionFactory::from_pool(pool).await.unwrap();
    (Arc::new(sessions), Arc::new(TracingLogger))
}

#[sqlx::test(migrator = "persistence::db::MIGRATOR")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn shopping_flow_from_registration_to_deletion(pool: PgPool) {
    let (sessions, logger) = wiring(pool).await;

    let user = RegisterShoppingUserUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    }
    .execute()
    .await
    .unwrap();

    let list = CreateItemListUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    }
    .execute(CreateItemListParams {
        user_id: user.id(),
        due_to: None,
    })
    .await
    .unwrap();

    let add_item = AddItemUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    };
    let item = add_item
        .execute(AddItemParams {
            user_id: user.id(),
            item_list_id: list.id(),
            quantity: 3,
        })
        .await
        .unwrap();

    let bought = UpdateItemUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    }
    .execute(UpdateItemParams {
        id: item.id(),
        user_id: user.id(),
        quantity: None,
        is_bought: Some(true),
    })
    .await
    .unwrap();
    assert!(bought.is_bought());

    let overview = GetShoppingUserOverviewUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    }
    .execute(GetShoppingUserOverviewParams { user_id: user.id() })
    .await
    .unwrap();
    assert_eq!(overview.lists(), &[list.clone()]);

    DeleteItemListUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    }
    .execute(DeleteItemListParams {
        id: list.id(),
        user_id: user.id(),
    })
    .await
    .unwrap();

    let mut session = sessions.begin().await.unwrap();
    assert!(session.items().by_list(list.id()).await.unwrap().is_empty());
    drop(session);

    let orphan = add_item
        .execute(AddItemParams {
            user_id: user.id(),
            item_list_id: list.id(),
            quantity: 1,
        })
        .await;
    assert!(matches!(orphan, Err(ItemError::ListNotFound)));

    let delete_user = DeleteShoppingUserUseCaseImpl {
        sessions: sessions.clone(),
        logger: logger.clone(),
    };
    delete_user
        .execute(DeleteShoppingUserParams { user_id: user.id() })
        .await
        .unwrap();
    let again = delete_user
        .execute(DeleteShoppingUserParams { user_id: user.id() })
        .await;
    assert!(matches!(again, Err(ShoppingUserError::NotFound)));
}

#[sqlx::test(migrator = "persistence::db::MIGRATOR")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn attaching_picture_to_unknown_user_fails(pool: PgPool) {
    let (sessions, logger) = wiring(pool).await;

    let result = AttachItemPictureUseCaseImpl { sessions, logger }
        .execute(AttachItemPictureParams {
            user_id: UserId::new(404),
        })
        .await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        ItemPictureError::UserNotFound(ref cause)
            if cause.constraint() == Some("FK_Pictures_Users_UserId")
    ));
}
