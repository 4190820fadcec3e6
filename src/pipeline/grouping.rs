// ==========================================
// 保税库存销货清单生成系统 - 两级分组引擎
// ==========================================
// 第一级: (出库日期, 出库对象), 仅取未入账行
// 第二级: 组内按规格汇总
// 两级均稳定: IndexMap 保持键的首现顺序,
// 桶内保持源行顺序
// ==========================================

use crate::domain::inventory::{GroupKey, InventoryRow, ProductAggregate};
use indexmap::IndexMap;

/// 按 (出库日期, 出库对象) 分组
///
/// 不变式: 各桶互不相交, 并集等于未入账的输入行集
pub fn group_by_date_and_customer(rows: Vec<InventoryRow>) -> IndexMap<GroupKey, Vec<InventoryRow>> {
    let mut grouped: IndexMap<GroupKey, Vec<InventoryRow>> = IndexMap::new();

    for row in rows {
        // 只处理未入账的数据
        if row.is_recorded() {
            continue;
        }
        let key = (row.outbound_date, row.customer.clone());
        grouped.entry(key).or_default().push(row);
    }

    grouped
}

/// 组内按规格汇总
///
/// 净重缺失按 0.0 计入: 该件仍计件数, 只是不贡献重量
pub fn group_by_product(items: &[InventoryRow]) -> IndexMap<String, ProductAggregate> {
    let mut products: IndexMap<String, ProductAggregate> = IndexMap::new();

    for item in items {
        let net_weight = item.net_weight.unwrap_or(0.0);
        let aggregate = products.entry(item.specification.clone()).or_default();
        aggregate.piece_count += 1;
        aggregate.net_weights.push(net_weight);
        aggregate.total_net_weight += net_weight;
    }

    products
}
