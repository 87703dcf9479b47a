/// Вызываемая способность обработчика события.
///
/// Обработчик не получает аргументов: всё нужное состояние он захватывает
/// замыканием при подписке. Блэнкет-реализация покрывает любые `FnMut()`,
/// поэтому в `on`/`several`/`through` можно передавать обычные замыкания.
pub trait Handler {
    /// Реакция на одно уведомление.
    fn invoke(&mut self);
}

impl<F: FnMut()> Handler for F {
    fn invoke(&mut self) {
        self()
    }
}

/// Обработчик, хранящийся в узле дерева.
pub(crate) type BoxedHandler = Box<dyn Handler>;

/// Обёртка «не более `times` срабатываний».
///
/// Держит приватный счётчик оставшихся срабатываний. Пока счётчик
/// положителен, каждое уведомление передаётся внутреннему обработчику;
/// после исчерпания обёртка становится навсегда инертной — она продолжает
/// получать уведомления, но ничего не делает и сама не отписывается.
pub struct Several<H> {
    inner: H,
    remaining: usize,
}

impl<H> Several<H> {
    /// Оборачивает `inner`, разрешая ему не более `times` срабатываний.
    pub fn new(inner: H, times: usize) -> Self {
        Several {
            inner,
            remaining: times,
        }
    }
}

impl<H: Handler> Handler for Several<H> {
    fn invoke(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.inner.invoke();
        }
    }
}

/// Обёртка «каждое `frequency`-е уведомление».
///
/// Счётчик устроен так, что самое ПЕРВОЕ уведомление всегда доходит до
/// внутреннего обработчика, далее срабатывают уведомления 1 + frequency,
/// 1 + 2·frequency и т. д.; остальные поглощаются. Счётчик приватен для
/// каждого экземпляра обёртки: две подписки через `through` независимы,
/// даже если сделаны на один и тот же путь.
pub struct Through<H> {
    inner: H,
    frequency: usize,
    counter: usize,
}

impl<H> Through<H> {
    /// Оборачивает `inner` с шагом `frequency`.
    ///
    /// Паникует при `frequency == 0`: нулевой шаг означает «без
    /// ограничения» и обслуживается `Emitter::through` как обычный `on`,
    /// сама обёртка нулевой шаг не принимает.
    pub fn new(inner: H, frequency: usize) -> Self {
        assert!(frequency > 0, "frequency must be at least 1");
        Through {
            inner,
            frequency,
            counter: 0,
        }
    }
}

impl<H: Handler> Handler for Through<H> {
    fn invoke(&mut self) {
        self.counter %= self.frequency;
        if self.counter == 0 {
            self.inner.invoke();
        }
        self.counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    /// Счётчик вызовов, который удобно делить с замыканием.
    fn counting_handler() -> (Rc<Cell<usize>>, impl FnMut()) {
        let calls = Rc::new(Cell::new(0));
        let inner = calls.clone();
        (calls, move || inner.set(inner.get() + 1))
    }

    /// Тест проверяет, что `Several` передаёт ровно `times` первых
    /// уведомлений, а дальше становится инертным.
    #[test]
    fn test_several_stops_after_limit() {
        let (calls, handler) = counting_handler();
        let mut wrapped = Several::new(handler, 3);

        for _ in 0..5 {
            wrapped.invoke();
        }
        assert_eq!(calls.get(), 3);

        // исчерпанная обёртка остаётся безвредной
        wrapped.invoke();
        assert_eq!(calls.get(), 3);
    }

    /// Тест проверяет, что `Through` срабатывает на уведомлениях
    /// 1, 1+f, 1+2f, ... и поглощает остальные.
    #[test]
    fn test_through_fires_every_nth() {
        let (calls, handler) = counting_handler();
        let mut wrapped = Through::new(handler, 3);

        let mut observed = Vec::new();
        for notification in 1..=7 {
            let before = calls.get();
            wrapped.invoke();
            if calls.get() > before {
                observed.push(notification);
            }
        }
        assert_eq!(observed, vec![1, 4, 7]);
    }

    /// Тест проверяет, что счётчики двух обёрток независимы.
    #[test]
    fn test_wrappers_have_private_counters() {
        let (calls_a, handler_a) = counting_handler();
        let (calls_b, handler_b) = counting_handler();
        let mut a = Through::new(handler_a, 2);
        let mut b = Through::new(handler_b, 2);

        a.invoke();
        a.invoke();
        b.invoke();

        // `a` уже поглотил второе уведомление, `b` только начал
        assert_eq!(calls_a.get(), 1);
        assert_eq!(calls_b.get(), 1);
    }

    /// Тест проверяет, что нулевой шаг отвергается при конструировании,
    /// а не всплывает позже делением по модулю на ноль в `invoke`.
    #[test]
    #[should_panic(expected = "frequency must be at least 1")]
    fn test_through_rejects_zero_frequency() {
        let (_calls, handler) = counting_handler();
        let _ = Through::new(handler, 0);
    }

    /// Тест проверяет, что `Several` с нулевым лимитом не вызывает
    /// внутренний обработчик вовсе.
    #[test]
    fn test_several_zero_is_inert() {
        let (calls, handler) = counting_handler();
        let mut wrapped = Several::new(handler, 0);
        wrapped.invoke();
        assert_eq!(calls.get(), 0);
    }
}
