#![allow(dead_code)]

use std::fs;
use sememe_similarity::Config;
use tempfile::TempDir;

// entity|实体 ─┬─ thing|万物 ─── animal|动物 ─┬─ human|人
//              │                              └─ beast|兽 ─── livestock|牲畜
//              └─ event|事件 ─── act|行动 ─┬─ fight|争斗
//                                          └─ employ|雇用
// attribute|属性 (own root)
pub const HIERARCHY: &str = "\
0   entity|实体      0
1   thing|万物       0
2   animal|动物      1
3   human|人         2
4   beast|兽         2
5   livestock|牲畜   4
6   event|事件       0
7   act|行动         6
8   fight|争斗       7
9   employ|雇用      7
10  attribute|属性   10
";

pub const GLOSSARY: &str = "\
牛 N livestock|牲畜
猪 N livestock|牲畜
牛 ADJ attribute|属性,(stubborn|倔)
打 V fight|争斗,agent=human|人,patient=beast|兽
揍 V fight|争斗,agent=human|人,patient=beast|兽,#act|行动
雇 V employ|雇用,agent=human|人
的 STRU {DeChinese|的}
之 STRU {DeChinese|的}
this line is broken,
中国 N place|地方,(China|中国)
";

pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

pub fn fixture() -> Fixture {
    fixture_with(HIERARCHY, GLOSSARY)
}

pub fn fixture_with(hierarchy: &str, glossary: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let hierarchy_path = dir.path().join("WHOLE.DAT");
    let glossary_path = dir.path().join("glossary.dat");
    fs::write(&hierarchy_path, hierarchy).unwrap();
    fs::write(&glossary_path, glossary).unwrap();

    let config = Config {
        glossary_path,
        hierarchy_path,
        workers: 2,
        ..Config::default()
    };
    Fixture { dir, config }
}
