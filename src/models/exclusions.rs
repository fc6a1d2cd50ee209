//! Built-in exclusion table.
//!
//! Boilerplate phrases and English stopwords that mark administrative filings,
//! plus instrument codes of ETFs, ETNs and REITs that recur on the listing.

/// Title keywords, matched as case-sensitive substrings.
pub const KEYWORDS: &[&str] = &[
    "定時株主総会", "提案書", "Report", "Results", "Summary", "Notice",
    "Presentation", "Announcement", "自己株式", "ガバナンス", "Share", "Notification",
    "Status", "訂正", "払込", "経過", "人事異動", "results",
    "行使状況", "Regarding", "of", "for", "the", "ETF",
    "招集ご通知", "株主総会資料", "REIT", "独立役員届出書", "発行内容確定", "定款",
    "ＥＴＦ", "ＥＴＮ", "ETN", "日々の開示", "認証取得", "統合レポート",
    "統合報告書",
];

/// Instrument codes, matched exactly against the code column.
pub const CODES: &[&str] = &[
    "1308", "1348", "1473", "2557", "1305", "1475", "2625", "1306", "2524", "1330", "1346", "1578",
    "1369", "1397", "1320", "1321", "1329", "2525", "2624", "1592", "1593", "1474", "1591", "1364",
    "2526", "1319", "2516", "1563", "1551", "2017", "159A", "348A", "1311", "1493", "1617", "1618",
    "1619", "1620", "1621", "1622", "1623", "1624", "1625", "1626", "1627", "1628", "1629", "1630",
    "1631", "1632", "1633", "1615", "1698", "1577", "1586", "2523", "1585", "1596", "1477", "1478",
    "1399", "1479", "1480", "1481", "1484", "1483", "1485", "399A", "1489", "1494", "1651", "1652",
    "2518", "1653", "1654", "1498", "2529", "2560", "2642", "2567", "2564", "2626", "2627", "2636",
    "2637", "2638", "2639", "2640", "2641", "2643", "2644", "2645", "2646", "2836", "2837", "2847",
    "2848", "2849", "2851", "2854", "2250", "213A", "221A", "200A", "234A", "235A", "282A", "294A",
    "315A", "328A", "354A", "1490", "1499", "2858", "2865", "2868", "379A", "2863", "1345", "1597",
    "1398", "2552", "2555", "2556", "1343", "1476", "1488", "1595", "2517", "360A", "2528", "2527",
    "2565", "1555", "1495", "1659", "1660", "2515", "2566", "2852", "2855", "2864", "2096", "2097",
    "2098", "2018", "210A", "1322", "2553", "1309", "2530", "2628", "2629", "1678", "201A", "233A",
    "188A", "1559", "1560", "1679", "1546", "2562", "2846", "2235", "2241", "2242", "2088", "1547",
    "1557", "2558", "2633", "1655", "2521", "2563", "2630", "2634", "2247", "2248", "2086", "2635",
    "2236", "2095", "364A", "318A", "313A", "346A", "356A", "383A", "426A", "1545", "2568", "2569",
    "2631", "2632", "2840", "2841", "2845", "2087", "392A", "1325", "1680", "1550", "2513", "2514",
    "1681", "2520", "1554", "2559", "1657", "1658", "2522", "2859", "2860", "2089", "2867", "2243",
    "2244", "2252", "2253", "2254", "2013", "2014", "178A", "223A", "224A", "273A", "283A", "295A",
    "316A", "363A", "380A", "404A", "412A", "413A", "2510", "2561", "236A", "1349", "1677", "2511",
    "2512", "1566", "2519", "1482", "1486", "1487", "1496", "1497", "1656", "2554", "2620", "2621",
    "2622", "2623", "2647", "2648", "376A", "2090", "2838", "2839", "2649", "2856", "2255", "2256",
    "2257", "2258", "2012", "133A", "179A", "180A", "181A", "182A", "183A", "237A", "238A", "2843",
    "2844", "2853", "2857", "2245", "2091", "2861", "2862", "2246", "2092", "2259", "2866", "2019",
    "1328", "1326", "1672", "1540", "314A", "424A", "425A", "1674", "1541", "1673", "1542", "1675",
    "1543", "1671", "1699", "1676", "1684", "1685", "1686", "1687", "1688", "1689", "1690", "1691",
    "1692", "1693", "1694", "1695", "1696", "1697", "1599", "2080", "2081", "2082", "2083", "2084",
    "2085", "2093", "2011", "2015", "2016", "170A", "257A", "258A", "349A", "381A", "382A", "394A",
    "395A", "396A", "408A", "8951", "8952", "8953", "8954", "8955", "8956", "8957", "8958", "8960",
    "8961", "8964", "8966", "8967", "8968", "8972", "8975", "8976", "8977", "8984", "8985", "8986",
    "8987", "8963", "3226", "3234", "3249", "3269", "8979", "3279", "3281", "3282", "3283", "3287",
    "3290", "3292", "3295", "3296", "3451", "3309", "3455", "3459", "3462", "3463", "3466", "3468",
    "3470", "3471", "3472", "3476", "3481", "3487", "3488", "3492", "2971", "2972", "2979", "2989",
    "401A",
];
