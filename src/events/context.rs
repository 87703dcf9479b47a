use std::sync::atomic::{AtomicU64, Ordering};

/// Глобальный счётчик идентификаторов контекстов. Начинается с 1,
/// чтобы нулевое значение никогда не встречалось в работе.
static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Идентичность подписчика.
///
/// `Context` — непрозрачный токен, которым группируются подписки одного
/// логического подписчика: `off` снимает подписки по токену, а не по
/// конкретному обработчику. Сравнение всегда по идентичности, не по
/// содержимому: `Context::new()` каждый раз выдаёт новый уникальный токен,
/// а копии одного токена равны между собой.
///
/// Состояние самого подписчика токен не хранит — обработчик захватывает
/// нужные данные замыканием, токен служит только ключом отмены.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context(u64);

impl Context {
    /// Выдаёт новый уникальный токен из глобального счётчика.
    pub fn new() -> Self {
        Context(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Context {
    /// Эквивалентно `Context::new()`: каждый вызов — новая идентичность.
    fn default() -> Self {
        Self::new()
    }
}
