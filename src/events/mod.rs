//! Иерархическая подсистема событий (event tree).
//!
//! Имена событий — это пути, разделённые точками (`"a.b.c"`), образующие
//! дерево пространств имён. Подписка привязывается ровно к одному узлу,
//! а публикация уведомляет узел и всех его предков: `emit("a.b.c")`
//! срабатывает также для подписчиков `"a.b"` и `"a"`.
//!
//! Модули:
//!
//! - `context`: идентичность подписчика (ключ отмены подписок).
//! - `emitter`: диспетчер — публичный API `on`/`off`/`emit`/`several`/`through`.
//! - `handler`: вызываемая способность обработчика и комбинаторы
//!   с ограничением частоты (`Several`, `Through`).
//! - `node`: узел дерева событий и его подписки.
//! - `path`: разбор пути на сегменты.
//!
//! Публичный API переэкспортирует:
//! - `context::*`
//! - `emitter::*`
//! - `handler::*`
//! - `node::*`
//! - `path::*`

pub mod context;
pub mod emitter;
pub mod handler;
pub mod node;
pub mod path;

// Публичный экспорт всех типов и функций из вложенных модулей,
// чтобы упростить доступ к ним из внешнего кода.
pub use context::*;
pub use emitter::*;
pub use handler::*;
pub use node::*;
pub use path::*;
