use std::collections::HashMap;

use super::{context::Context, handler::BoxedHandler};

/// Подписки одного контекста на одном узле: упорядоченный список
/// обработчиков. Каждый `on` добавляет обработчик в конец, не заменяя
/// предыдущие.
struct SubscriptionGroup {
    context: Context,
    handlers: Vec<BoxedHandler>,
}

/// Узел дерева событий.
///
/// **ИНВАРИАНТЫ:**
///
/// - путь узла однозначно определяется последовательностью ключей-сегментов
///   от корня до него; дерево имеет ровно один корень (пустой путь);
/// - порядок групп в `subscriptions` и обработчиков внутри группы равен
///   порядку регистрации и сохраняется при уведомлении;
/// - дочерние узлы принадлежат родителю монопольно, обратных ссылок нет,
///   поэтому обход и удаление поддеревьев всегда обоснованы.
///
/// Узлы создаются лениво при первом проходе через сегмент (подписка,
/// публикация и отписка одинаково достраивают недостающую структуру)
/// и живут до конца жизни диспетчера, даже оставшись без подписок.
#[derive(Default)]
pub struct EventNode {
    children: HashMap<String, EventNode>,
    subscriptions: Vec<SubscriptionGroup>,
}

impl EventNode {
    /// Возвращает дочерний узел по сегменту, создавая его при отсутствии.
    pub(crate) fn child_mut(&mut self, segment: &str) -> &mut EventNode {
        self.children.entry(segment.to_string()).or_default()
    }

    /// Добавляет обработчик в группу контекста, создавая группу при
    /// первой подписке этого контекста на узле.
    pub(crate) fn add_subscription(
        &mut self,
        context: Context,
        handler: BoxedHandler,
    ) {
        match self
            .subscriptions
            .iter_mut()
            .find(|group| group.context == context)
        {
            Some(group) => group.handlers.push(handler),
            None => self.subscriptions.push(SubscriptionGroup {
                context,
                handlers: vec![handler],
            }),
        }
    }

    /// Удаляет группу контекста на этом узле (если она есть).
    /// Дочерние узлы не затрагиваются.
    pub(crate) fn remove_subscriptions(&mut self, context: Context) {
        self.subscriptions
            .retain(|group| group.context != context);
    }

    /// Вызывает каждый обработчик каждой группы в порядке регистрации.
    pub(crate) fn notify(&mut self) {
        for group in &mut self.subscriptions {
            for handler in &mut group.handlers {
                handler.invoke();
            }
        }
    }

    /// Итератор по дочерним узлам для обхода поддерева.
    pub(crate) fn children_mut(
        &mut self,
    ) -> std::collections::hash_map::ValuesMut<'_, String, EventNode> {
        self.children.values_mut()
    }

    /// Количество обработчиков на узле и во всём его поддереве.
    pub(crate) fn subscription_count(&self) -> usize {
        let own: usize = self
            .subscriptions
            .iter()
            .map(|group| group.handlers.len())
            .sum();
        let descendants: usize = self
            .children
            .values()
            .map(EventNode::subscription_count)
            .sum();
        own + descendants
    }

    /// Количество узлов в поддереве, включая сам узел.
    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(EventNode::node_count)
            .sum::<usize>()
    }
}
