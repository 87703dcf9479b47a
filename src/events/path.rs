/// Разбирает путь события на упорядоченную последовательность сегментов.
///
/// Путь делится по `.`, пустые сегменты отбрасываются, поэтому ведущие,
/// хвостовые и сдвоенные точки молча допускаются: `".a..b."` разбирается
/// так же, как `"a.b"`. Пустая строка или строка из одних точек дают
/// пустую последовательность — целью считается сам корень дерева.
///
/// Любая строка является корректным путём, ошибок разбора не бывает.
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}
