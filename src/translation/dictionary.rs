//! 内置的英文 → 希伯来文界面词典
//!
//! 匹配是精确且区分大小写的，所以同一个按钮的不同大小写写法各占一条。

/// 内置词典条目
pub const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    // Buttons
    ("Add to cart", "הוסף לסל"),
    ("Add to Cart", "הוסף לסל"),
    ("ADD TO CART", "הוסף לסל"),
    ("Buy it now", "קנה עכשיו"),
    ("Buy now", "קנה עכשיו"),
    ("BUY IT NOW", "קנה עכשיו"),
    ("BUY NOW", "קנה עכשיו"),
    ("Checkout", "לתשלום"),
    ("Check out", "לתשלום"),
    ("View cart", "צפה בסל"),
    ("View Cart", "צפה בסל"),
    ("Continue shopping", "המשך לקנות"),
    ("Continue Shopping", "המשך לקנות"),
    ("Update cart", "עדכן סל"),
    ("Subscribe", "הרשם"),
    ("Sign up", "הרשמה"),
    ("Sign in", "התחברות"),
    ("Log in", "התחברות"),
    ("Log out", "התנתקות"),
    ("Sign out", "התנתקות"),
    ("Submit", "שלח"),
    ("Send", "שלח"),
    ("Apply", "החל"),
    ("Remove", "הסר"),
    ("Cancel", "ביטול"),
    ("Close", "סגור"),
    ("Save", "שמור"),
    ("Search", "חיפוש"),
    ("Load more", "טען עוד"),
    ("Show more", "הצג עוד"),
    ("Read more", "קרא עוד"),
    ("View all", "צפה בהכל"),
    ("See all", "צפה בהכל"),
    ("Select options", "בחר אפשרויות"),
    ("Choose options", "בחר אפשרויות"),
    ("Quick view", "תצוגה מהירה"),
    ("Sold out", "אזל מהמלאי"),
    ("SOLD OUT", "אזל מהמלאי"),
    ("Unavailable", "לא זמין"),
    ("Notify me", "הודע לי"),
    ("Pre-order", "הזמנה מוקדמת"),
    ("Clear all", "נקה הכל"),
    ("Reset", "איפוס"),
    ("Filter", "סינון"),
    ("Sort", "מיון"),

    // Navigation
    ("Home", "עמוד הבית"),
    ("Shop", "חנות"),
    ("Shop all", "כל המוצרים"),
    ("Collections", "קולקציות"),
    ("Products", "מוצרים"),
    ("All products", "כל המוצרים"),
    ("New arrivals", "חדשים"),
    ("Best sellers", "הנמכרים ביותר"),
    ("Sale", "מבצעים"),
    ("About", "אודות"),
    ("About us", "אודותינו"),
    ("Contact", "צור קשר"),
    ("Contact us", "צור קשר"),
    ("Blog", "בלוג"),
    ("FAQ", "שאלות נפוצות"),
    ("Help", "עזרה"),
    ("Support", "תמיכה"),
    ("Terms of service", "תנאי שירות"),
    ("Privacy policy", "מדיניות פרטיות"),
    ("Refund policy", "מדיניות החזרות"),
    ("Shipping policy", "מדיניות משלוחים"),
    ("My account", "החשבון שלי"),
    ("Account", "חשבון"),
    ("Orders", "הזמנות"),
    ("Cart", "סל קניות"),
    ("Menu", "תפריט"),
    ("Gift cards", "כרטיסי מתנה"),
    ("Catalog", "קטלוג"),

    // Product
    ("Price", "מחיר"),
    ("Quantity", "כמות"),
    ("Size", "מידה"),
    ("Color", "צבע"),
    ("Material", "חומר"),
    ("Brand", "מותג"),
    ("In stock", "במלאי"),
    ("Out of stock", "אזל מהמלאי"),
    ("Description", "תיאור"),
    ("Details", "פרטים"),
    ("Reviews", "ביקורות"),
    ("Write a review", "כתוב ביקורת"),
    ("You may also like", "אולי תאהב גם"),
    ("Recently viewed", "נצפו לאחרונה"),
    ("Related products", "מוצרים קשורים"),
    ("Free shipping", "משלוח חינם"),
    ("Tax included", "כולל מע\"מ"),

    // Cart
    ("Your cart", "סל הקניות שלך"),
    ("Shopping cart", "סל קניות"),
    ("Your cart is empty", "סל הקניות שלך ריק"),
    ("Item", "פריט"),
    ("Items", "פריטים"),
    ("Subtotal", "סה\"כ ביניים"),
    ("Total", "סה\"כ"),
    ("Discount", "הנחה"),
    ("Discount code", "קוד הנחה"),
    ("Coupon code", "קוד קופון"),
    ("Taxes", "מיסים"),
    ("Shipping", "משלוח"),
    ("Calculated at checkout", "יחושב בתשלום"),
    ("Free", "חינם"),
    ("Order note", "הערה להזמנה"),
    ("Continue to checkout", "המשך לתשלום"),

    // Account
    ("Create account", "צור חשבון"),
    ("Register", "הרשמה"),
    ("Login", "התחברות"),
    ("Password", "סיסמה"),
    ("Forgot password", "שכחתי סיסמה"),
    ("Reset password", "איפוס סיסמה"),
    ("First name", "שם פרטי"),
    ("Last name", "שם משפחה"),
    ("Email", "אימייל"),
    ("Phone", "טלפון"),

    // Search
    ("Search our store", "חפש בחנות שלנו"),
    ("Search results", "תוצאות חיפוש"),
    ("No results found", "לא נמצאו תוצאות"),
    ("Popular searches", "חיפושים פופולריים"),

    // Footer
    ("Newsletter", "ניוזלטר"),
    ("Subscribe to our newsletter", "הרשם לניוזלטר שלנו"),
    ("Enter your email", "הכנס את האימייל שלך"),
    ("Follow us", "עקוב אחרינו"),
    ("Customer service", "שירות לקוחות"),
    ("Quick links", "קישורים מהירים"),
    ("All rights reserved", "כל הזכויות שמורות"),
    ("Powered by Shopify", "מופעל על ידי Shopify"),

    // Filters
    ("Filter by", "סנן לפי"),
    ("Sort by", "מיין לפי"),
    ("Best selling", "הנמכרים ביותר"),
    ("Alphabetically, A-Z", "אלפביתי, א-ת"),
    ("Alphabetically, Z-A", "אלפביתי, ת-א"),
    ("Price, low to high", "מחיר, מהנמוך לגבוה"),
    ("Price, high to low", "מחיר, מהגבוה לנמוך"),
    ("Date, new to old", "תאריך, מהחדש לישן"),
    ("Date, old to new", "תאריך, מהישן לחדש"),
    ("Featured", "מומלצים"),

    // Accessibility
    ("Skip to content", "דלג לתוכן"),
    ("Close menu", "סגור תפריט"),

    // General
    ("or", "או"),
    ("from", "מ"),
    ("Loading", "טוען..."),
];

/// 被 `buyNowText` 覆盖的键
pub const BUY_NOW_KEYS: &[&str] = &["Buy it now", "Buy now", "BUY IT NOW", "BUY NOW"];

/// 被 `addToCartText` 覆盖的键
pub const ADD_TO_CART_KEYS: &[&str] = &["Add to cart", "Add to Cart", "ADD TO CART"];
