use pizza_sms::clients::{actor_client::ActorClient, CustomerClient};
use pizza_sms::conversation_actor::{ConversationContext, ConversationError};
use pizza_sms::domain::{Customer, CustomerId, InteractionState, MenuCatalog};
use pizza_sms::engine::Reply;
use pizza_sms::framework::mock::MockClient;
use std::sync::Arc;

/// Real Conversation actor with a mocked interaction tracker.
///
/// Pattern 2: Actor + Mocks
/// - Real Conversation actor (tests `on_create` and the engine wiring)
/// - Mocked Customer client (isolates the tracker)
#[tokio::test]
async fn test_conversation_actor_with_mocked_tracker() {
    let id = CustomerId::from("+15550700");

    // Conversation::on_create asks the tracker whether the customer is known
    let mut customer_mock = MockClient::<Customer>::new();
    customer_mock
        .expect_get(id.clone())
        .return_ok(Some(Customer::new(id.clone(), InteractionState::Interacted)));

    let context = ConversationContext {
        catalog: Arc::new(MenuCatalog::pizzeria()),
        customers: CustomerClient::new(customer_mock.client()),
    };

    let (conversation_actor, conversation_client) = pizza_sms::conversation_actor::new(10);
    let actor_handle = tokio::spawn(conversation_actor.run(context));

    conversation_client.open(id.clone()).await.unwrap();

    let reply = conversation_client
        .handle_message(id.clone(), "A".to_string())
        .await
        .unwrap();
    assert_eq!(
        reply,
        Reply::Selected {
            product: "Pepperoni Pizza".to_string()
        }
    );

    let reply = conversation_client
        .handle_message(id.clone(), "3".to_string())
        .await
        .unwrap();
    assert_eq!(
        reply.to_string(),
        "You've ordered:\n3 Pepperoni Pizza - $12.99 each\nReply with 'menu' to add another pizza or 'done' to complete your order."
    );

    let conversation = conversation_client.view(id.clone()).await.unwrap().unwrap();
    assert_eq!(conversation.order.line("Pepperoni Pizza").unwrap().quantity, 3);
    assert_eq!(conversation.selected.as_deref(), Some("Pepperoni Pizza"));

    customer_mock.verify();

    drop(conversation_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_conversation_refused_for_unknown_customer() {
    let id = CustomerId::from("+15550701");

    let mut customer_mock = MockClient::<Customer>::new();
    customer_mock.expect_get(id.clone()).return_ok(None);

    let context = ConversationContext {
        catalog: Arc::new(MenuCatalog::pizzeria()),
        customers: CustomerClient::new(customer_mock.client()),
    };

    let (conversation_actor, conversation_client) = pizza_sms::conversation_actor::new(10);
    let actor_handle = tokio::spawn(conversation_actor.run(context));

    let result = conversation_client.open(id.clone()).await;
    assert_eq!(
        result,
        Err(ConversationError::UnknownCustomer("+15550701".to_string()))
    );

    // Nothing was stored
    assert!(conversation_client.get(id.clone()).await.unwrap().is_none());
    let result = conversation_client.handle_message(id, "menu".to_string()).await;
    assert!(matches!(result, Err(ConversationError::NotFound(_))));

    customer_mock.verify();

    drop(conversation_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_conversations_are_isolated_per_customer() {
    let alice = CustomerId::from("+15550702");
    let bob = CustomerId::from("+15550703");

    let mut customer_mock = MockClient::<Customer>::new();
    customer_mock
        .expect_get(alice.clone())
        .return_ok(Some(Customer::new(alice.clone(), InteractionState::Interacted)));
    customer_mock
        .expect_get(bob.clone())
        .return_ok(Some(Customer::new(bob.clone(), InteractionState::Interacted)));

    let context = ConversationContext {
        catalog: Arc::new(MenuCatalog::pizzeria()),
        customers: CustomerClient::new(customer_mock.client()),
    };

    let (conversation_actor, conversation_client) = pizza_sms::conversation_actor::new(10);
    let actor_handle = tokio::spawn(conversation_actor.run(context));

    conversation_client.open(alice.clone()).await.unwrap();
    conversation_client.open(bob.clone()).await.unwrap();

    for (id, text) in [(&alice, "a"), (&bob, "c"), (&alice, "2"), (&bob, "1")] {
        conversation_client
            .handle_message(id.clone(), text.to_string())
            .await
            .unwrap();
    }

    let done = conversation_client
        .handle_message(alice.clone(), "done".to_string())
        .await
        .unwrap();
    assert_eq!(
        done.to_string(),
        "Thanks for your order!\n2 Pepperoni Pizza - $12.99 each\nTotal: $25.98"
    );

    let bob_conversation = conversation_client.view(bob.clone()).await.unwrap().unwrap();
    assert_eq!(bob_conversation.order.len(), 1);
    assert_eq!(bob_conversation.order.line("Meat Lovers Pizza").unwrap().quantity, 1);

    customer_mock.verify();

    drop(conversation_client);
    actor_handle.await.unwrap();
}
