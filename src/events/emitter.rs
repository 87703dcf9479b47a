use tracing::trace;

use super::{
    context::Context,
    handler::{Handler, Several, Through},
    node::EventNode,
    path::parse_path,
};

/// Диспетчер событийного дерева.
///
/// Поддерживает:
/// - Подписки на точный узел пути (`on`)
/// - Публикацию с распространением вверх по предкам (`emit`)
/// - Отписку контекста от узла и всего его поддерева (`off`)
/// - Ограниченные подписки: не более N раз (`several`) и каждое N-е (`through`)
/// - Статистику публикаций (`emit_count`)
///
/// Один экземпляр — одно независимое пространство имён; узлы между
/// экземплярами никогда не разделяются. Все мутаторы возвращают
/// `&mut Self`, поэтому вызовы сцепляются в цепочки.
///
/// Диспетчер полностью синхронный: `emit` вызывает все подходящие
/// обработчики в стеке вызова до возврата. Паника обработчика
/// распространяется немедленно, оставшиеся обработчики и узлы этой
/// публикации не вызываются. Списки обработчиков при публикации не
/// снапшотятся: `emit` берёт `&mut self`, так что повторный вход в тот же
/// диспетчер из обработчика возможен только через обёртку с внутренней
/// изменяемостью на стороне вызывающего (например `Rc<RefCell<_>>`)
/// и тогда завершается паникой заимствования во время выполнения.
#[derive(Default)]
pub struct Emitter {
    /// Корень дерева, владеет всеми узлами. Соответствует пустому пути.
    root: EventNode,
    /// Общее количество вызовов `emit`, включая публикации
    /// по путям без единого подписчика.
    emit_count: usize,
}

impl Emitter {
    /// Создаёт новый `Emitter` с пустым деревом.
    pub fn new() -> Self {
        Self::default()
    }

    /// Подписка контекста на точный узел пути.
    ///
    /// Путь разбирается по точкам, недостающие узлы достраиваются;
    /// пустой путь (или путь из одних точек) означает корень. Обработчик
    /// дописывается в конец списка контекста: повторная подписка того же
    /// контекста добавляет второй обработчик, не заменяя первый.
    /// Любая строка принимается, ошибок не бывает.
    pub fn on<H>(&mut self, path: &str, context: Context, handler: H) -> &mut Self
    where
        H: Handler + 'static,
    {
        trace!("on: path={:?}, context={:?}", path, context);
        self.materialize(path)
            .add_subscription(context, Box::new(handler));
        self
    }

    /// Отписка контекста от узла пути и всего его поддерева.
    ///
    /// Снимает подписки контекста на самом узле и на каждом его потомке:
    /// `off("a.b", ctx)` отменяет и подписки `ctx` на `"a.b.c"`,
    /// но не трогает `"a"` и `"a.x"`. Отписка от никогда не виденного
    /// пути — безвредный no-op, который всё же достраивает узел.
    pub fn off(&mut self, path: &str, context: Context) -> &mut Self {
        trace!("off: path={:?}, context={:?}", path, context);
        let leaf = self.materialize(path);
        let mut stack: Vec<&mut EventNode> = vec![leaf];
        while let Some(node) = stack.pop() {
            node.remove_subscriptions(context);
            stack.extend(node.children_mut());
        }
        self
    }

    /// Публикация события.
    ///
    /// Уведомляет узел пути и всех его предков, от самого глубокого к
    /// самому мелкому: `emit("a.b.c")` сначала вызывает обработчики
    /// `"a.b.c"`, затем `"a.b"`, затем `"a"`. Обработчики одного узла
    /// выполняются до перехода к следующему. Сам корень уведомляется
    /// только если опубликован пустой путь.
    ///
    /// Публикация никогда не бывает чистым чтением: недостающие узлы
    /// по пути достраиваются, даже если подписчиков нет.
    pub fn emit(&mut self, path: &str) -> &mut Self {
        self.emit_count += 1;
        trace!("emit: path={:?}", path);
        let segments = parse_path(path);
        if segments.is_empty() {
            self.root.notify();
        } else {
            Self::emit_chain(&mut self.root, &segments);
        }
        self
    }

    /// Подписка «не более `times` срабатываний».
    ///
    /// После `times` реальных вызовов обработчик становится навсегда
    /// инертным, но остаётся зарегистрированным (сам не отписывается).
    /// `times == 0` ведёт себя в точности как `on` (без ограничения).
    pub fn several<H>(
        &mut self,
        path: &str,
        context: Context,
        handler: H,
        times: usize,
    ) -> &mut Self
    where
        H: Handler + 'static,
    {
        if times == 0 {
            return self.on(path, context, handler);
        }
        self.on(path, context, Several::new(handler, times))
    }

    /// Подписка «каждое `frequency`-е уведомление».
    ///
    /// Самое первое уведомление всегда доходит до обработчика, далее
    /// срабатывают уведомления 1 + frequency, 1 + 2·frequency и т. д.
    /// `frequency == 0` ведёт себя в точности как `on` (каждый вызов).
    pub fn through<H>(
        &mut self,
        path: &str,
        context: Context,
        handler: H,
        frequency: usize,
    ) -> &mut Self
    where
        H: Handler + 'static,
    {
        if frequency == 0 {
            return self.on(path, context, handler);
        }
        self.on(path, context, Through::new(handler, frequency))
    }

    /// Общее количество вызовов `emit` за время жизни диспетчера.
    pub fn emit_count(&self) -> usize {
        self.emit_count
    }

    /// Количество зарегистрированных обработчиков во всём дереве,
    /// включая исчерпанные обёртки `several`.
    pub fn subscription_count(&self) -> usize {
        self.root.subscription_count()
    }

    /// Количество узлов дерева, включая корень. Растёт при подписках
    /// и публикациях по новым путям, но никогда не уменьшается.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Спускается от корня к листу, достраивая недостающие узлы.
    /// Пустая последовательность сегментов разрешается в сам корень.
    fn materialize(&mut self, path: &str) -> &mut EventNode {
        let mut node = &mut self.root;
        for segment in parse_path(path) {
            node = node.child_mut(segment);
        }
        node
    }

    /// Рекурсивный спуск по цепочке сегментов: уведомления идут при
    /// раскрутке рекурсии, то есть от листа к корню (пост-обход).
    fn emit_chain(node: &mut EventNode, segments: &[&str]) {
        if let Some((first, rest)) = segments.split_first() {
            let child = node.child_mut(first);
            Self::emit_chain(child, rest);
            child.notify();
        }
    }
}
