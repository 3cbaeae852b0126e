//! Weighted brand corpus for typosquat detection.
//!
//! Keys are the lowercase, letters-only form a brand takes as a hostname
//! label. Weights express how attractive the brand is as a phishing target.

use serde::Serialize;

/// Sector a brand operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Social,
    Technology,
    Finance,
    Crypto,
    Ecommerce,
    Messaging,
    Government,
    Insurance,
    Email,
    Cloud,
    Gaming,
    Travel,
    Media,
    Telecom,
    Logistics,
    Education,
    Software,
    Automotive,
}

/// One corpus entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brand {
    pub key: &'static str,
    pub name: &'static str,
    pub industry: Industry,
    pub risk_weight: f64,
}

impl Brand {
    const fn new(key: &'static str, name: &'static str, industry: Industry, risk_weight: f64) -> Self {
        Self {
            key,
            name,
            industry,
            risk_weight,
        }
    }
}

use Industry::*;

/// Brands commonly impersonated in phishing campaigns.
pub static BRANDS: &[Brand] = &[
    // Social
    Brand::new("facebook", "Facebook", Social, 0.9),
    Brand::new("instagram", "Instagram", Social, 0.9),
    Brand::new("twitter", "Twitter", Social, 0.9),
    Brand::new("linkedin", "LinkedIn", Social, 0.8),
    Brand::new("tiktok", "TikTok", Social, 0.9),
    Brand::new("snapchat", "Snapchat", Social, 0.8),
    Brand::new("pinterest", "Pinterest", Social, 0.7),
    Brand::new("reddit", "Reddit", Social, 0.7),
    Brand::new("tumblr", "Tumblr", Social, 0.6),
    Brand::new("quora", "Quora", Social, 0.6),
    Brand::new("threads", "Threads", Social, 0.7),
    Brand::new("mastodon", "Mastodon", Social, 0.5),
    Brand::new("vkontakte", "VKontakte", Social, 0.7),
    Brand::new("weibo", "Weibo", Social, 0.7),
    Brand::new("flickr", "Flickr", Social, 0.5),
    Brand::new("myspace", "Myspace", Social, 0.4),
    Brand::new("nextdoor", "Nextdoor", Social, 0.6),
    Brand::new("tinder", "Tinder", Social, 0.7),
    Brand::new("bumble", "Bumble", Social, 0.6),
    Brand::new("hinge", "Hinge", Social, 0.6),
    Brand::new("match", "Match", Social, 0.6),
    Brand::new("okcupid", "OkCupid", Social, 0.6),
    Brand::new("meetup", "Meetup", Social, 0.5),
    Brand::new("deviantart", "DeviantArt", Social, 0.5),
    Brand::new("vimeo", "Vimeo", Social, 0.6),
    Brand::new("twitch", "Twitch", Social, 0.8),
    Brand::new("patreon", "Patreon", Social, 0.7),
    Brand::new("onlyfans", "OnlyFans", Social, 0.7),
    Brand::new("medium", "Medium", Social, 0.5),
    Brand::new("substack", "Substack", Social, 0.5),
    Brand::new("bluesky", "Bluesky", Social, 0.6),
    Brand::new("clubhouse", "Clubhouse", Social, 0.5),
    Brand::new("badoo", "Badoo", Social, 0.5),
    Brand::new("grindr", "Grindr", Social, 0.6),
    Brand::new("xing", "XING", Social, 0.5),
    Brand::new("douyin", "Douyin", Social, 0.6),
    // Technology
    Brand::new("google", "Google", Technology, 0.95),
    Brand::new("microsoft", "Microsoft", Technology, 0.85),
    Brand::new("apple", "Apple", Technology, 0.9),
    Brand::new("amazon", "Amazon", Technology, 0.9),
    Brand::new("netflix", "Netflix", Technology, 0.85),
    Brand::new("youtube", "YouTube", Technology, 0.85),
    Brand::new("adobe", "Adobe", Technology, 0.7),
    Brand::new("spotify", "Spotify", Technology, 0.8),
    Brand::new("zoom", "Zoom", Technology, 0.85),
    Brand::new("slack", "Slack", Technology, 0.7),
    Brand::new("office", "Microsoft Office", Technology, 0.85),
    Brand::new("windows", "Windows", Technology, 0.8),
    Brand::new("github", "GitHub", Technology, 0.8),
    Brand::new("gitlab", "GitLab", Technology, 0.7),
    Brand::new("bitbucket", "Bitbucket", Technology, 0.6),
    Brand::new("atlassian", "Atlassian", Technology, 0.7),
    Brand::new("salesforce", "Salesforce", Technology, 0.8),
    Brand::new("oracle", "Oracle", Technology, 0.7),
    Brand::new("intel", "Intel", Technology, 0.5),
    Brand::new("nvidia", "NVIDIA", Technology, 0.6),
    Brand::new("samsung", "Samsung", Technology, 0.8),
    Brand::new("huawei", "Huawei", Technology, 0.7),
    Brand::new("xiaomi", "Xiaomi", Technology, 0.7),
    Brand::new("lenovo", "Lenovo", Technology, 0.6),
    Brand::new("dell", "Dell", Technology, 0.6),
    Brand::new("asus", "ASUS", Technology, 0.5),
    Brand::new("acer", "Acer", Technology, 0.5),
    Brand::new("sony", "Sony", Technology, 0.7),
    Brand::new("logitech", "Logitech", Technology, 0.5),
    Brand::new("cisco", "Cisco", Technology, 0.7),
    Brand::new("vmware", "VMware", Technology, 0.6),
    Brand::new("ibm", "IBM", Technology, 0.6),
    Brand::new("openai", "OpenAI", Technology, 0.8),
    Brand::new("chatgpt", "ChatGPT", Technology, 0.8),
    Brand::new("anthropic", "Anthropic", Technology, 0.7),
    Brand::new("mozilla", "Mozilla", Technology, 0.6),
    Brand::new("firefox", "Firefox", Technology, 0.6),
    Brand::new("chrome", "Chrome", Technology, 0.7),
    Brand::new("android", "Android", Technology, 0.7),
    Brand::new("docusign", "DocuSign", Technology, 0.9),
    Brand::new("shopify", "Shopify", Technology, 0.8),
    Brand::new("squarespace", "Squarespace", Technology, 0.6),
    Brand::new("wordpress", "WordPress", Technology, 0.7),
    Brand::new("wix", "Wix", Technology, 0.6),
    Brand::new("godaddy", "GoDaddy", Technology, 0.8),
    Brand::new("namecheap", "Namecheap", Technology, 0.7),
    Brand::new("cloudflare", "Cloudflare", Technology, 0.8),
    Brand::new("digitalocean", "DigitalOcean", Technology, 0.6),
    Brand::new("heroku", "Heroku", Technology, 0.6),
    Brand::new("twilio", "Twilio", Technology, 0.6),
    Brand::new("mailchimp", "Mailchimp", Technology, 0.7),
    Brand::new("hubspot", "HubSpot", Technology, 0.7),
    Brand::new("zendesk", "Zendesk", Technology, 0.7),
    Brand::new("freshdesk", "Freshdesk", Technology, 0.6),
    Brand::new("intuit", "Intuit", Technology, 0.85),
    Brand::new("quickbooks", "QuickBooks", Technology, 0.85),
    Brand::new("turbotax", "TurboTax", Technology, 0.85),
    Brand::new("autodesk", "Autodesk", Technology, 0.6),
    Brand::new("canva", "Canva", Technology, 0.7),
    Brand::new("figma", "Figma", Technology, 0.6),
    Brand::new("notion", "Notion", Technology, 0.6),
    Brand::new("trello", "Trello", Technology, 0.6),
    Brand::new("asana", "Asana", Technology, 0.6),
    Brand::new("evernote", "Evernote", Technology, 0.6),
    Brand::new("lastpass", "LastPass", Technology, 0.9),
    Brand::new("onepassword", "1Password", Technology, 0.9),
    Brand::new("bitwarden", "Bitwarden", Technology, 0.9),
    Brand::new("dashlane", "Dashlane", Technology, 0.8),
    Brand::new("norton", "Norton", Technology, 0.8),
    Brand::new("mcafee", "McAfee", Technology, 0.8),
    Brand::new("kaspersky", "Kaspersky", Technology, 0.7),
    Brand::new("avast", "Avast", Technology, 0.7),
    Brand::new("malwarebytes", "Malwarebytes", Technology, 0.7),
    Brand::new("okta", "Okta", Technology, 0.9),
    Brand::new("duosecurity", "Duo Security", Technology, 0.8),
    Brand::new("teamviewer", "TeamViewer", Technology, 0.8),
    Brand::new("anydesk", "AnyDesk", Technology, 0.8),
    Brand::new("webex", "Webex", Technology, 0.8),
    Brand::new("gotomeeting", "GoToMeeting", Technology, 0.7),
    Brand::new("sharepoint", "SharePoint", Technology, 0.85),
    Brand::new("azure", "Azure", Technology, 0.8),
    Brand::new("xerox", "Xerox", Technology, 0.4),
    Brand::new("garmin", "Garmin", Technology, 0.5),
    Brand::new("fitbit", "Fitbit", Technology, 0.5),
    Brand::new("roku", "Roku", Technology, 0.6),
    Brand::new("sonos", "Sonos", Technology, 0.4),
    Brand::new("baidu", "Baidu", Technology, 0.6),
    Brand::new("yandex", "Yandex", Technology, 0.7),
    Brand::new("tencent", "Tencent", Technology, 0.7),
    Brand::new("alibaba", "Alibaba", Technology, 0.8),
    Brand::new("naver", "Naver", Technology, 0.6),
    Brand::new("duckduckgo", "DuckDuckGo", Technology, 0.5),
    Brand::new("bing", "Bing", Technology, 0.6),
    Brand::new("wikipedia", "Wikipedia", Technology, 0.5),
    // Finance
    Brand::new("paypal", "PayPal", Finance, 0.95),
    Brand::new("chase", "Chase", Finance, 0.9),
    Brand::new("bankofamerica", "Bank of America", Finance, 0.9),
    Brand::new("wellsfargo", "Wells Fargo", Finance, 0.9),
    Brand::new("citibank", "Citi Bank", Finance, 0.9),
    Brand::new("americanexpress", "American Express", Finance, 0.9),
    Brand::new("capitalone", "Capital One", Finance, 0.9),
    Brand::new("schwab", "Charles Schwab", Finance, 0.85),
    Brand::new("fidelity", "Fidelity", Finance, 0.85),
    Brand::new("usbank", "U.S. Bank", Finance, 0.85),
    Brand::new("amex", "American Express", Finance, 0.9),
    Brand::new("discover", "Discover", Finance, 0.85),
    Brand::new("visa", "Visa", Finance, 0.9),
    Brand::new("mastercard", "Mastercard", Finance, 0.9),
    Brand::new("venmo", "Venmo", Finance, 0.9),
    Brand::new("zelle", "Zelle", Finance, 0.9),
    Brand::new("cashapp", "Cash App", Finance, 0.9),
    Brand::new("stripe", "Stripe", Finance, 0.85),
    Brand::new("square", "Square", Finance, 0.8),
    Brand::new("revolut", "Revolut", Finance, 0.9),
    Brand::new("monzo", "Monzo", Finance, 0.9),
    Brand::new("wise", "Wise", Finance, 0.85),
    Brand::new("transferwise", "TransferWise", Finance, 0.85),
    Brand::new("westernunion", "Western Union", Finance, 0.9),
    Brand::new("moneygram", "MoneyGram", Finance, 0.9),
    Brand::new("robinhood", "Robinhood", Finance, 0.9),
    Brand::new("vanguard", "Vanguard", Finance, 0.85),
    Brand::new("etrade", "E*TRADE", Finance, 0.85),
    Brand::new("ameritrade", "TD Ameritrade", Finance, 0.85),
    Brand::new("merrill", "Merrill", Finance, 0.85),
    Brand::new("morganstanley", "Morgan Stanley", Finance, 0.85),
    Brand::new("goldmansachs", "Goldman Sachs", Finance, 0.85),
    Brand::new("jpmorgan", "J.P. Morgan", Finance, 0.9),
    Brand::new("hsbc", "HSBC", Finance, 0.9),
    Brand::new("barclays", "Barclays", Finance, 0.9),
    Brand::new("lloyds", "Lloyds Bank", Finance, 0.9),
    Brand::new("natwest", "NatWest", Finance, 0.9),
    Brand::new("santander", "Santander", Finance, 0.9),
    Brand::new("halifax", "Halifax", Finance, 0.9),
    Brand::new("nationwide", "Nationwide", Finance, 0.85),
    Brand::new("rbc", "RBC", Finance, 0.85),
    Brand::new("tdbank", "TD Bank", Finance, 0.9),
    Brand::new("scotiabank", "Scotiabank", Finance, 0.85),
    Brand::new("bmo", "BMO", Finance, 0.85),
    Brand::new("cibc", "CIBC", Finance, 0.85),
    Brand::new("desjardins", "Desjardins", Finance, 0.85),
    Brand::new("commbank", "CommBank", Finance, 0.9),
    Brand::new("westpac", "Westpac", Finance, 0.9),
    Brand::new("anz", "ANZ", Finance, 0.85),
    Brand::new("nab", "NAB", Finance, 0.85),
    Brand::new("ing", "ING", Finance, 0.85),
    Brand::new("deutschebank", "Deutsche Bank", Finance, 0.85),
    Brand::new("commerzbank", "Commerzbank", Finance, 0.85),
    Brand::new("sparkasse", "Sparkasse", Finance, 0.85),
    Brand::new("bnpparibas", "BNP Paribas", Finance, 0.85),
    Brand::new("creditagricole", "Credit Agricole", Finance, 0.85),
    Brand::new("societegenerale", "Societe Generale", Finance, 0.85),
    Brand::new("unicredit", "UniCredit", Finance, 0.85),
    Brand::new("intesasanpaolo", "Intesa Sanpaolo", Finance, 0.85),
    Brand::new("bbva", "BBVA", Finance, 0.85),
    Brand::new("caixabank", "CaixaBank", Finance, 0.85),
    Brand::new("rabobank", "Rabobank", Finance, 0.85),
    Brand::new("abnamro", "ABN AMRO", Finance, 0.85),
    Brand::new("nordea", "Nordea", Finance, 0.85),
    Brand::new("danskebank", "Danske Bank", Finance, 0.85),
    Brand::new("ubs", "UBS", Finance, 0.85),
    Brand::new("creditsuisse", "Credit Suisse", Finance, 0.85),
    Brand::new("pnc", "PNC", Finance, 0.85),
    Brand::new("truist", "Truist", Finance, 0.85),
    Brand::new("regions", "Regions", Finance, 0.8),
    Brand::new("citizensbank", "Citizens Bank", Finance, 0.85),
    Brand::new("fifththird", "Fifth Third", Finance, 0.85),
    Brand::new("huntington", "Huntington", Finance, 0.85),
    Brand::new("keybank", "KeyBank", Finance, 0.85),
    Brand::new("ally", "Ally", Finance, 0.85),
    Brand::new("synchrony", "Synchrony", Finance, 0.85),
    Brand::new("navyfederal", "Navy Federal", Finance, 0.9),
    Brand::new("usaa", "USAA", Finance, 0.9),
    Brand::new("sofi", "SoFi", Finance, 0.85),
    Brand::new("chime", "Chime", Finance, 0.85),
    Brand::new("varo", "Varo", Finance, 0.8),
    Brand::new("klarna", "Klarna", Finance, 0.85),
    Brand::new("afterpay", "Afterpay", Finance, 0.85),
    Brand::new("affirm", "Affirm", Finance, 0.85),
    Brand::new("payoneer", "Payoneer", Finance, 0.85),
    Brand::new("skrill", "Skrill", Finance, 0.85),
    Brand::new("neteller", "Neteller", Finance, 0.85),
    Brand::new("alipay", "Alipay", Finance, 0.85),
    Brand::new("wechatpay", "WeChat Pay", Finance, 0.85),
    Brand::new("paytm", "Paytm", Finance, 0.85),
    Brand::new("phonepe", "PhonePe", Finance, 0.85),
    Brand::new("icicibank", "ICICI Bank", Finance, 0.85),
    Brand::new("hdfcbank", "HDFC Bank", Finance, 0.85),
    Brand::new("sbi", "State Bank of India", Finance, 0.85),
    Brand::new("axisbank", "Axis Bank", Finance, 0.85),
    Brand::new("kotak", "Kotak", Finance, 0.85),
    Brand::new("mufg", "MUFG", Finance, 0.8),
    Brand::new("mizuho", "Mizuho", Finance, 0.8),
    Brand::new("equifax", "Equifax", Finance, 0.85),
    Brand::new("experian", "Experian", Finance, 0.85),
    Brand::new("transunion", "TransUnion", Finance, 0.85),
    Brand::new("creditkarma", "Credit Karma", Finance, 0.85),
    Brand::new("nerdwallet", "NerdWallet", Finance, 0.6),
    Brand::new("hrblock", "H&R Block", Finance, 0.85),
    Brand::new("americafirst", "America First", Finance, 0.8),
    Brand::new("suntrust", "SunTrust", Finance, 0.85),
    Brand::new("bankofscotland", "Bank of Scotland", Finance, 0.85),
    Brand::new("postbank", "Postbank", Finance, 0.85),
    // Crypto
    Brand::new("coinbase", "Coinbase", Crypto, 0.95),
    Brand::new("binance", "Binance", Crypto, 0.95),
    Brand::new("metamask", "MetaMask", Crypto, 0.9),
    Brand::new("trustwallet", "Trust Wallet", Crypto, 0.9),
    Brand::new("kraken", "Kraken", Crypto, 0.9),
    Brand::new("ledger", "Ledger", Crypto, 0.9),
    Brand::new("trezor", "Trezor", Crypto, 0.9),
    Brand::new("cryptocom", "Crypto.com", Crypto, 0.9),
    Brand::new("blockchain", "Blockchain.com", Crypto, 0.9),
    Brand::new("gemini", "Gemini", Crypto, 0.9),
    Brand::new("bitstamp", "Bitstamp", Crypto, 0.9),
    Brand::new("bitfinex", "Bitfinex", Crypto, 0.9),
    Brand::new("kucoin", "KuCoin", Crypto, 0.9),
    Brand::new("okx", "OKX", Crypto, 0.9),
    Brand::new("bybit", "Bybit", Crypto, 0.9),
    Brand::new("huobi", "Huobi", Crypto, 0.9),
    Brand::new("gateio", "Gate.io", Crypto, 0.85),
    Brand::new("bitget", "Bitget", Crypto, 0.85),
    Brand::new("mexc", "MEXC", Crypto, 0.85),
    Brand::new("uniswap", "Uniswap", Crypto, 0.9),
    Brand::new("pancakeswap", "PancakeSwap", Crypto, 0.9),
    Brand::new("opensea", "OpenSea", Crypto, 0.9),
    Brand::new("phantom", "Phantom", Crypto, 0.9),
    Brand::new("exodus", "Exodus", Crypto, 0.9),
    Brand::new("electrum", "Electrum", Crypto, 0.85),
    Brand::new("myetherwallet", "MyEtherWallet", Crypto, 0.9),
    Brand::new("etherscan", "Etherscan", Crypto, 0.85),
    Brand::new("coinmarketcap", "CoinMarketCap", Crypto, 0.7),
    Brand::new("coingecko", "CoinGecko", Crypto, 0.7),
    Brand::new("bitcoin", "Bitcoin", Crypto, 0.85),
    Brand::new("ethereum", "Ethereum", Crypto, 0.85),
    Brand::new("solana", "Solana", Crypto, 0.85),
    Brand::new("polygon", "Polygon", Crypto, 0.8),
    Brand::new("arbitrum", "Arbitrum", Crypto, 0.8),
    Brand::new("walletconnect", "WalletConnect", Crypto, 0.9),
    Brand::new("rainbow", "Rainbow", Crypto, 0.7),
    Brand::new("coinomi", "Coinomi", Crypto, 0.85),
    Brand::new("atomicwallet", "Atomic Wallet", Crypto, 0.9),
    Brand::new("blockfi", "BlockFi", Crypto, 0.85),
    Brand::new("celsius", "Celsius", Crypto, 0.8),
    Brand::new("nexo", "Nexo", Crypto, 0.85),
    Brand::new("bitpay", "BitPay", Crypto, 0.85),
    Brand::new("paxful", "Paxful", Crypto, 0.85),
    Brand::new("localbitcoins", "LocalBitcoins", Crypto, 0.85),
    Brand::new("curve", "Curve", Crypto, 0.7),
    Brand::new("aave", "Aave", Crypto, 0.8),
    Brand::new("compound", "Compound", Crypto, 0.7),
    Brand::new("lido", "Lido", Crypto, 0.8),
    Brand::new("sushiswap", "SushiSwap", Crypto, 0.85),
    Brand::new("magiceden", "Magic Eden", Crypto, 0.85),
    Brand::new("blur", "Blur", Crypto, 0.7),
    Brand::new("tonkeeper", "Tonkeeper", Crypto, 0.85),
    Brand::new("keplr", "Keplr", Crypto, 0.85),
    // Ecommerce
    Brand::new("ebay", "eBay", Ecommerce, 0.8),
    Brand::new("aliexpress", "AliExpress", Ecommerce, 0.7),
    Brand::new("walmart", "Walmart", Ecommerce, 0.7),
    Brand::new("target", "Target", Ecommerce, 0.7),
    Brand::new("bestbuy", "Best Buy", Ecommerce, 0.7),
    Brand::new("homedepot", "Home Depot", Ecommerce, 0.7),
    Brand::new("lowes", "Lowe's", Ecommerce, 0.7),
    Brand::new("costco", "Costco", Ecommerce, 0.7),
    Brand::new("etsy", "Etsy", Ecommerce, 0.7),
    Brand::new("wayfair", "Wayfair", Ecommerce, 0.6),
    Brand::new("temu", "Temu", Ecommerce, 0.7),
    Brand::new("shein", "SHEIN", Ecommerce, 0.7),
    Brand::new("wish", "Wish", Ecommerce, 0.6),
    Brand::new("rakuten", "Rakuten", Ecommerce, 0.7),
    Brand::new("flipkart", "Flipkart", Ecommerce, 0.8),
    Brand::new("mercadolibre", "Mercado Libre", Ecommerce, 0.8),
    Brand::new("zalando", "Zalando", Ecommerce, 0.7),
    Brand::new("asos", "ASOS", Ecommerce, 0.6),
    Brand::new("ikea", "IKEA", Ecommerce, 0.6),
    Brand::new("macys", "Macy's", Ecommerce, 0.6),
    Brand::new("nordstrom", "Nordstrom", Ecommerce, 0.6),
    Brand::new("kohls", "Kohl's", Ecommerce, 0.6),
    Brand::new("sephora", "Sephora", Ecommerce, 0.6),
    Brand::new("ulta", "Ulta", Ecommerce, 0.5),
    Brand::new("nike", "Nike", Ecommerce, 0.7),
    Brand::new("adidas", "Adidas", Ecommerce, 0.7),
    Brand::new("zara", "Zara", Ecommerce, 0.6),
    Brand::new("uniqlo", "Uniqlo", Ecommerce, 0.5),
    Brand::new("gap", "Gap", Ecommerce, 0.5),
    Brand::new("hm", "H&M", Ecommerce, 0.5),
    Brand::new("newegg", "Newegg", Ecommerce, 0.6),
    Brand::new("overstock", "Overstock", Ecommerce, 0.5),
    Brand::new("chewy", "Chewy", Ecommerce, 0.5),
    Brand::new("instacart", "Instacart", Ecommerce, 0.7),
    Brand::new("doordash", "DoorDash", Ecommerce, 0.7),
    Brand::new("ubereats", "Uber Eats", Ecommerce, 0.7),
    Brand::new("grubhub", "Grubhub", Ecommerce, 0.6),
    Brand::new("deliveroo", "Deliveroo", Ecommerce, 0.7),
    Brand::new("justeat", "Just Eat", Ecommerce, 0.6),
    Brand::new("tesco", "Tesco", Ecommerce, 0.7),
    Brand::new("sainsburys", "Sainsbury's", Ecommerce, 0.6),
    Brand::new("asda", "Asda", Ecommerce, 0.6),
    Brand::new("argos", "Argos", Ecommerce, 0.6),
    Brand::new("currys", "Currys", Ecommerce, 0.6),
    Brand::new("carrefour", "Carrefour", Ecommerce, 0.6),
    Brand::new("lidl", "Lidl", Ecommerce, 0.6),
    Brand::new("aldi", "Aldi", Ecommerce, 0.6),
    Brand::new("kroger", "Kroger", Ecommerce, 0.6),
    Brand::new("safeway", "Safeway", Ecommerce, 0.6),
    Brand::new("walgreens", "Walgreens", Ecommerce, 0.7),
    Brand::new("cvs", "CVS", Ecommerce, 0.7),
    Brand::new("samsclub", "Sam's Club", Ecommerce, 0.6),
    Brand::new("groupon", "Groupon", Ecommerce, 0.6),
    Brand::new("craigslist", "Craigslist", Ecommerce, 0.6),
    Brand::new("offerup", "OfferUp", Ecommerce, 0.6),
    Brand::new("poshmark", "Poshmark", Ecommerce, 0.6),
    Brand::new("depop", "Depop", Ecommerce, 0.5),
    Brand::new("vinted", "Vinted", Ecommerce, 0.7),
    Brand::new("stockx", "StockX", Ecommerce, 0.6),
    Brand::new("gumtree", "Gumtree", Ecommerce, 0.6),
    Brand::new("olx", "OLX", Ecommerce, 0.7),
    Brand::new("jumia", "Jumia", Ecommerce, 0.6),
    Brand::new("lazada", "Lazada", Ecommerce, 0.7),
    Brand::new("shopee", "Shopee", Ecommerce, 0.7),
    Brand::new("tokopedia", "Tokopedia", Ecommerce, 0.7),
    Brand::new("jdcom", "JD.com", Ecommerce, 0.7),
    Brand::new("taobao", "Taobao", Ecommerce, 0.7),
    Brand::new("bol", "Bol.com", Ecommerce, 0.6),
    Brand::new("otto", "Otto", Ecommerce, 0.5),
    Brand::new("cdiscount", "Cdiscount", Ecommerce, 0.6),
    Brand::new("allegro", "Allegro", Ecommerce, 0.7),
    // Messaging
    Brand::new("whatsapp", "WhatsApp", Messaging, 0.9),
    Brand::new("telegram", "Telegram", Messaging, 0.8),
    Brand::new("signal", "Signal", Messaging, 0.7),
    Brand::new("discord", "Discord", Messaging, 0.7),
    Brand::new("skype", "Skype", Messaging, 0.6),
    Brand::new("messenger", "Messenger", Messaging, 0.8),
    Brand::new("viber", "Viber", Messaging, 0.7),
    Brand::new("wechat", "WeChat", Messaging, 0.7),
    Brand::new("line", "LINE", Messaging, 0.6),
    Brand::new("kakaotalk", "KakaoTalk", Messaging, 0.7),
    Brand::new("imessage", "iMessage", Messaging, 0.7),
    Brand::new("teams", "Microsoft Teams", Messaging, 0.85),
    Brand::new("element", "Element", Messaging, 0.5),
    Brand::new("wire", "Wire", Messaging, 0.5),
    Brand::new("threema", "Threema", Messaging, 0.5),
    Brand::new("zalo", "Zalo", Messaging, 0.6),
    // Government
    Brand::new("irs", "IRS", Government, 0.95),
    Brand::new("ssa", "Social Security", Government, 0.95),
    Brand::new("usps", "USPS", Government, 0.8),
    Brand::new("dmv", "DMV", Government, 0.8),
    Brand::new("hmrc", "HMRC", Government, 0.95),
    Brand::new("govuk", "GOV.UK", Government, 0.9),
    Brand::new("dvla", "DVLA", Government, 0.9),
    Brand::new("nhs", "NHS", Government, 0.9),
    Brand::new("cra", "Canada Revenue Agency", Government, 0.9),
    Brand::new("ato", "ATO", Government, 0.9),
    Brand::new("mygov", "myGov", Government, 0.9),
    Brand::new("centrelink", "Centrelink", Government, 0.9),
    Brand::new("medicare", "Medicare", Government, 0.9),
    Brand::new("medicaid", "Medicaid", Government, 0.85),
    Brand::new("healthcare", "HealthCare.gov", Government, 0.8),
    Brand::new("uscis", "USCIS", Government, 0.9),
    Brand::new("fbi", "FBI", Government, 0.8),
    Brand::new("treasury", "Treasury", Government, 0.85),
    Brand::new("studentaid", "Federal Student Aid", Government, 0.85),
    Brand::new("fema", "FEMA", Government, 0.8),
    Brand::new("ftc", "FTC", Government, 0.8),
    Brand::new("sec", "SEC", Government, 0.8),
    Brand::new("logingov", "Login.gov", Government, 0.9),
    Brand::new("idme", "ID.me", Government, 0.9),
    Brand::new("servicecanada", "Service Canada", Government, 0.85),
    Brand::new("finanzamt", "Finanzamt", Government, 0.85),
    Brand::new("impots", "Impots.gouv", Government, 0.9),
    Brand::new("ameli", "Ameli", Government, 0.9),
    Brand::new("agenciatributaria", "Agencia Tributaria", Government, 0.85),
    Brand::new("belastingdienst", "Belastingdienst", Government, 0.9),
    Brand::new("skatteverket", "Skatteverket", Government, 0.85),
    Brand::new("incometax", "Income Tax Department", Government, 0.85),
    Brand::new("aadhaar", "Aadhaar", Government, 0.85),
    Brand::new("passport", "Passport Office", Government, 0.8),
    // Insurance
    Brand::new("statefarm", "State Farm", Insurance, 0.85),
    Brand::new("geico", "GEICO", Insurance, 0.85),
    Brand::new("progressive", "Progressive", Insurance, 0.8),
    Brand::new("allstate", "Allstate", Insurance, 0.8),
    Brand::new("libertymutual", "Liberty Mutual", Insurance, 0.8),
    Brand::new("nationwideins", "Nationwide Insurance", Insurance, 0.8),
    Brand::new("farmers", "Farmers Insurance", Insurance, 0.75),
    Brand::new("metlife", "MetLife", Insurance, 0.8),
    Brand::new("prudential", "Prudential", Insurance, 0.8),
    Brand::new("aetna", "Aetna", Insurance, 0.8),
    Brand::new("cigna", "Cigna", Insurance, 0.8),
    Brand::new("humana", "Humana", Insurance, 0.8),
    Brand::new("unitedhealthcare", "UnitedHealthcare", Insurance, 0.8),
    Brand::new("bluecross", "Blue Cross", Insurance, 0.8),
    Brand::new("anthem", "Anthem", Insurance, 0.8),
    Brand::new("kaiser", "Kaiser Permanente", Insurance, 0.8),
    Brand::new("aviva", "Aviva", Insurance, 0.8),
    Brand::new("axa", "AXA", Insurance, 0.8),
    Brand::new("allianz", "Allianz", Insurance, 0.8),
    Brand::new("zurich", "Zurich", Insurance, 0.75),
    Brand::new("aflac", "Aflac", Insurance, 0.75),
    Brand::new("travelers", "Travelers", Insurance, 0.75),
    Brand::new("chubb", "Chubb", Insurance, 0.75),
    Brand::new("hiscox", "Hiscox", Insurance, 0.7),
    // Email
    Brand::new("gmail", "Gmail", Email, 0.8),
    Brand::new("outlook", "Outlook", Email, 0.8),
    Brand::new("yahoo", "Yahoo", Email, 0.7),
    Brand::new("icloud", "iCloud", Email, 0.8),
    Brand::new("protonmail", "ProtonMail", Email, 0.7),
    Brand::new("hotmail", "Hotmail", Email, 0.8),
    Brand::new("aol", "AOL", Email, 0.7),
    Brand::new("zoho", "Zoho", Email, 0.7),
    Brand::new("gmx", "GMX", Email, 0.7),
    Brand::new("mailru", "Mail.ru", Email, 0.7),
    Brand::new("fastmail", "Fastmail", Email, 0.6),
    Brand::new("tutanota", "Tutanota", Email, 0.6),
    Brand::new("roundcube", "Roundcube", Email, 0.8),
    Brand::new("webmail", "Webmail", Email, 0.8),
    Brand::new("live", "Microsoft Live", Email, 0.8),
    Brand::new("comcast", "Comcast", Email, 0.8),
    Brand::new("xfinity", "Xfinity", Email, 0.8),
    Brand::new("att", "AT&T", Email, 0.8),
    Brand::new("yandexmail", "Yandex Mail", Email, 0.7),
    Brand::new("mimecast", "Mimecast", Email, 0.8),
    Brand::new("proofpoint", "Proofpoint", Email, 0.8),
    Brand::new("titan", "Titan Mail", Email, 0.6),
    Brand::new("rediffmail", "Rediffmail", Email, 0.6),
    // Cloud
    Brand::new("dropbox", "Dropbox", Cloud, 0.8),
    Brand::new("box", "Box", Cloud, 0.7),
    Brand::new("onedrive", "OneDrive", Cloud, 0.8),
    Brand::new("googledrive", "Google Drive", Cloud, 0.8),
    Brand::new("wetransfer", "WeTransfer", Cloud, 0.85),
    Brand::new("mega", "MEGA", Cloud, 0.7),
    Brand::new("mediafire", "MediaFire", Cloud, 0.7),
    Brand::new("pcloud", "pCloud", Cloud, 0.6),
    Brand::new("sugarsync", "SugarSync", Cloud, 0.5),
    Brand::new("egnyte", "Egnyte", Cloud, 0.6),
    Brand::new("sharefile", "ShareFile", Cloud, 0.8),
    Brand::new("backblaze", "Backblaze", Cloud, 0.5),
    Brand::new("idrive", "IDrive", Cloud, 0.5),
    Brand::new("aws", "Amazon Web Services", Cloud, 0.85),
    Brand::new("googlecloud", "Google Cloud", Cloud, 0.8),
    Brand::new("firebase", "Firebase", Cloud, 0.7),
    Brand::new("netlify", "Netlify", Cloud, 0.6),
    Brand::new("vercel", "Vercel", Cloud, 0.6),
    Brand::new("docsend", "DocSend", Cloud, 0.8),
    Brand::new("scribd", "Scribd", Cloud, 0.5),
    Brand::new("issuu", "Issuu", Cloud, 0.5),
    Brand::new("jotform", "Jotform", Cloud, 0.6),
    Brand::new("typeform", "Typeform", Cloud, 0.6),
    Brand::new("surveymonkey", "SurveyMonkey", Cloud, 0.6),
    Brand::new("smartsheet", "Smartsheet", Cloud, 0.6),
    Brand::new("airtable", "Airtable", Cloud, 0.6),
    Brand::new("adobesign", "Adobe Sign", Cloud, 0.8),
    Brand::new("hellosign", "HelloSign", Cloud, 0.8),
    Brand::new("pandadoc", "PandaDoc", Cloud, 0.8),
    // Gaming
    Brand::new("steam", "Steam", Gaming, 0.8),
    Brand::new("epicgames", "Epic Games", Gaming, 0.7),
    Brand::new("xbox", "Xbox", Gaming, 0.7),
    Brand::new("playstation", "PlayStation", Gaming, 0.7),
    Brand::new("nintendo", "Nintendo", Gaming, 0.7),
    Brand::new("roblox", "Roblox", Gaming, 0.8),
    Brand::new("minecraft", "Minecraft", Gaming, 0.7),
    Brand::new("blizzard", "Blizzard", Gaming, 0.7),
    Brand::new("battlenet", "Battle.net", Gaming, 0.8),
    Brand::new("riotgames", "Riot Games", Gaming, 0.7),
    Brand::new("leagueoflegends", "League of Legends", Gaming, 0.7),
    Brand::new("valorant", "Valorant", Gaming, 0.7),
    Brand::new("fortnite", "Fortnite", Gaming, 0.7),
    Brand::new("ubisoft", "Ubisoft", Gaming, 0.6),
    Brand::new("origin", "EA Origin", Gaming, 0.6),
    Brand::new("electronicarts", "Electronic Arts", Gaming, 0.6),
    Brand::new("rockstargames", "Rockstar Games", Gaming, 0.6),
    Brand::new("activision", "Activision", Gaming, 0.6),
    Brand::new("bethesda", "Bethesda", Gaming, 0.5),
    Brand::new("gog", "GOG", Gaming, 0.5),
    Brand::new("itchio", "itch.io", Gaming, 0.4),
    Brand::new("steamcommunity", "Steam Community", Gaming, 0.9),
    Brand::new("csgo", "CS:GO", Gaming, 0.8),
    Brand::new("dota", "Dota", Gaming, 0.6),
    Brand::new("genshin", "Genshin Impact", Gaming, 0.6),
    Brand::new("hoyoverse", "HoYoverse", Gaming, 0.6),
    Brand::new("supercell", "Supercell", Gaming, 0.6),
    Brand::new("clashofclans", "Clash of Clans", Gaming, 0.6),
    Brand::new("pokemon", "Pokemon", Gaming, 0.6),
    Brand::new("nexon", "Nexon", Gaming, 0.5),
    Brand::new("garena", "Garena", Gaming, 0.6),
    Brand::new("pubg", "PUBG", Gaming, 0.7),
    Brand::new("skinport", "Skinport", Gaming, 0.7),
    Brand::new("gamestop", "GameStop", Gaming, 0.6),
    Brand::new("humblebundle", "Humble Bundle", Gaming, 0.5),
    // Travel
    Brand::new("airbnb", "Airbnb", Travel, 0.8),
    Brand::new("booking", "Booking.com", Travel, 0.85),
    Brand::new("expedia", "Expedia", Travel, 0.8),
    Brand::new("tripadvisor", "Tripadvisor", Travel, 0.6),
    Brand::new("hotels", "Hotels.com", Travel, 0.7),
    Brand::new("agoda", "Agoda", Travel, 0.7),
    Brand::new("trivago", "Trivago", Travel, 0.6),
    Brand::new("kayak", "Kayak", Travel, 0.6),
    Brand::new("skyscanner", "Skyscanner", Travel, 0.6),
    Brand::new("priceline", "Priceline", Travel, 0.6),
    Brand::new("vrbo", "Vrbo", Travel, 0.7),
    Brand::new("uber", "Uber", Travel, 0.8),
    Brand::new("lyft", "Lyft", Travel, 0.7),
    Brand::new("grab", "Grab", Travel, 0.6),
    Brand::new("delta", "Delta", Travel, 0.7),
    Brand::new("united", "United Airlines", Travel, 0.7),
    Brand::new("americanairlines", "American Airlines", Travel, 0.7),
    Brand::new("southwest", "Southwest", Travel, 0.7),
    Brand::new("jetblue", "JetBlue", Travel, 0.6),
    Brand::new("emirates", "Emirates", Travel, 0.7),
    Brand::new("qatarairways", "Qatar Airways", Travel, 0.7),
    Brand::new("lufthansa", "Lufthansa", Travel, 0.7),
    Brand::new("britishairways", "British Airways", Travel, 0.7),
    Brand::new("airfrance", "Air France", Travel, 0.7),
    Brand::new("klm", "KLM", Travel, 0.7),
    Brand::new("ryanair", "Ryanair", Travel, 0.7),
    Brand::new("easyjet", "easyJet", Travel, 0.7),
    Brand::new("turkishairlines", "Turkish Airlines", Travel, 0.6),
    Brand::new("singaporeair", "Singapore Airlines", Travel, 0.6),
    Brand::new("qantas", "Qantas", Travel, 0.7),
    Brand::new("aircanada", "Air Canada", Travel, 0.7),
    Brand::new("marriott", "Marriott", Travel, 0.7),
    Brand::new("hilton", "Hilton", Travel, 0.7),
    Brand::new("hyatt", "Hyatt", Travel, 0.6),
    Brand::new("ihg", "IHG", Travel, 0.6),
    Brand::new("accor", "Accor", Travel, 0.6),
    Brand::new("hertz", "Hertz", Travel, 0.6),
    Brand::new("avis", "Avis", Travel, 0.6),
    Brand::new("enterprise", "Enterprise", Travel, 0.6),
    Brand::new("amtrak", "Amtrak", Travel, 0.6),
    Brand::new("trainline", "Trainline", Travel, 0.6),
    Brand::new("blablacar", "BlaBlaCar", Travel, 0.5),
    // Media
    Brand::new("hulu", "Hulu", Media, 0.7),
    Brand::new("disneyplus", "Disney+", Media, 0.8),
    Brand::new("disney", "Disney", Media, 0.7),
    Brand::new("hbomax", "HBO Max", Media, 0.7),
    Brand::new("paramount", "Paramount+", Media, 0.6),
    Brand::new("peacock", "Peacock", Media, 0.6),
    Brand::new("primevideo", "Prime Video", Media, 0.8),
    Brand::new("appletv", "Apple TV", Media, 0.7),
    Brand::new("crunchyroll", "Crunchyroll", Media, 0.6),
    Brand::new("deezer", "Deezer", Media, 0.5),
    Brand::new("soundcloud", "SoundCloud", Media, 0.5),
    Brand::new("pandora", "Pandora", Media, 0.5),
    Brand::new("tidal", "Tidal", Media, 0.5),
    Brand::new("audible", "Audible", Media, 0.6),
    Brand::new("kindle", "Kindle", Media, 0.7),
    Brand::new("nytimes", "New York Times", Media, 0.5),
    Brand::new("washingtonpost", "Washington Post", Media, 0.4),
    Brand::new("bbc", "BBC", Media, 0.5),
    Brand::new("cnn", "CNN", Media, 0.5),
    Brand::new("foxnews", "Fox News", Media, 0.4),
    Brand::new("reuters", "Reuters", Media, 0.4),
    Brand::new("bloomberg", "Bloomberg", Media, 0.5),
    Brand::new("forbes", "Forbes", Media, 0.4),
    Brand::new("espn", "ESPN", Media, 0.5),
    Brand::new("dazn", "DAZN", Media, 0.6),
    Brand::new("sky", "Sky", Media, 0.6),
    Brand::new("canalplus", "Canal+", Media, 0.5),
    Brand::new("directv", "DIRECTV", Media, 0.6),
    Brand::new("sling", "Sling TV", Media, 0.5),
    Brand::new("fubotv", "fuboTV", Media, 0.5),
    Brand::new("plex", "Plex", Media, 0.5),
    Brand::new("imdb", "IMDb", Media, 0.4),
    // Telecom
    Brand::new("verizon", "Verizon", Telecom, 0.8),
    Brand::new("tmobile", "T-Mobile", Telecom, 0.8),
    Brand::new("sprint", "Sprint", Telecom, 0.7),
    Brand::new("vodafone", "Vodafone", Telecom, 0.8),
    Brand::new("orange", "Orange", Telecom, 0.7),
    Brand::new("telekom", "Deutsche Telekom", Telecom, 0.7),
    Brand::new("telefonica", "Telefonica", Telecom, 0.7),
    Brand::new("movistar", "Movistar", Telecom, 0.7),
    Brand::new("bt", "BT", Telecom, 0.7),
    Brand::new("ee", "EE", Telecom, 0.6),
    Brand::new("three", "Three", Telecom, 0.6),
    Brand::new("virginmedia", "Virgin Media", Telecom, 0.7),
    Brand::new("spectrum", "Spectrum", Telecom, 0.7),
    Brand::new("cox", "Cox", Telecom, 0.6),
    Brand::new("centurylink", "CenturyLink", Telecom, 0.6),
    Brand::new("frontier", "Frontier", Telecom, 0.6),
    Brand::new("rogers", "Rogers", Telecom, 0.7),
    Brand::new("bell", "Bell", Telecom, 0.7),
    Brand::new("telus", "Telus", Telecom, 0.7),
    Brand::new("optus", "Optus", Telecom, 0.7),
    Brand::new("telstra", "Telstra", Telecom, 0.8),
    Brand::new("airtel", "Airtel", Telecom, 0.7),
    Brand::new("jio", "Jio", Telecom, 0.7),
    Brand::new("mtn", "MTN", Telecom, 0.7),
    Brand::new("safaricom", "Safaricom", Telecom, 0.7),
    Brand::new("mpesa", "M-Pesa", Telecom, 0.85),
    Brand::new("etisalat", "Etisalat", Telecom, 0.7),
    Brand::new("singtel", "Singtel", Telecom, 0.7),
    Brand::new("cricket", "Cricket Wireless", Telecom, 0.6),
    Brand::new("boostmobile", "Boost Mobile", Telecom, 0.6),
    Brand::new("metropcs", "Metro by T-Mobile", Telecom, 0.6),
    Brand::new("mintmobile", "Mint Mobile", Telecom, 0.6),
    Brand::new("googlefi", "Google Fi", Telecom, 0.7),
    // Logistics
    Brand::new("fedex", "FedEx", Logistics, 0.85),
    Brand::new("ups", "UPS", Logistics, 0.85),
    Brand::new("dhl", "DHL", Logistics, 0.9),
    Brand::new("royalmail", "Royal Mail", Logistics, 0.9),
    Brand::new("canadapost", "Canada Post", Logistics, 0.85),
    Brand::new("auspost", "Australia Post", Logistics, 0.85),
    Brand::new("laposte", "La Poste", Logistics, 0.85),
    Brand::new("deutschepost", "Deutsche Post", Logistics, 0.85),
    Brand::new("postnl", "PostNL", Logistics, 0.85),
    Brand::new("evri", "Evri", Logistics, 0.85),
    Brand::new("hermes", "Hermes", Logistics, 0.8),
    Brand::new("dpd", "DPD", Logistics, 0.85),
    Brand::new("gls", "GLS", Logistics, 0.8),
    Brand::new("tnt", "TNT", Logistics, 0.8),
    Brand::new("aramex", "Aramex", Logistics, 0.8),
    Brand::new("purolator", "Purolator", Logistics, 0.8),
    Brand::new("ontrac", "OnTrac", Logistics, 0.7),
    Brand::new("yodel", "Yodel", Logistics, 0.8),
    Brand::new("parcelforce", "Parcelforce", Logistics, 0.85),
    Brand::new("correos", "Correos", Logistics, 0.85),
    Brand::new("posteitaliane", "Poste Italiane", Logistics, 0.85),
    Brand::new("chronopost", "Chronopost", Logistics, 0.8),
    Brand::new("colissimo", "Colissimo", Logistics, 0.85),
    Brand::new("inpost", "InPost", Logistics, 0.85),
    Brand::new("japanpost", "Japan Post", Logistics, 0.8),
    Brand::new("indiapost", "India Post", Logistics, 0.8),
    Brand::new("swisspost", "Swiss Post", Logistics, 0.8),
    Brand::new("bpost", "bpost", Logistics, 0.8),
    Brand::new("postnord", "PostNord", Logistics, 0.85),
    Brand::new("maersk", "Maersk", Logistics, 0.6),
    Brand::new("shipstation", "ShipStation", Logistics, 0.6),
    // Education
    Brand::new("coursera", "Coursera", Education, 0.5),
    Brand::new("udemy", "Udemy", Education, 0.5),
    Brand::new("edx", "edX", Education, 0.5),
    Brand::new("khanacademy", "Khan Academy", Education, 0.4),
    Brand::new("duolingo", "Duolingo", Education, 0.5),
    Brand::new("blackboard", "Blackboard", Education, 0.7),
    Brand::new("canvas", "Canvas LMS", Education, 0.7),
    Brand::new("moodle", "Moodle", Education, 0.7),
    Brand::new("chegg", "Chegg", Education, 0.5),
    Brand::new("quizlet", "Quizlet", Education, 0.5),
    Brand::new("grammarly", "Grammarly", Education, 0.6),
    Brand::new("turnitin", "Turnitin", Education, 0.6),
    Brand::new("harvard", "Harvard", Education, 0.5),
    Brand::new("stanford", "Stanford", Education, 0.5),
    Brand::new("mit", "MIT", Education, 0.5),
    Brand::new("pearson", "Pearson", Education, 0.5),
    Brand::new("collegeboard", "College Board", Education, 0.6),
    Brand::new("schoology", "Schoology", Education, 0.6),
    Brand::new("classdojo", "ClassDojo", Education, 0.5),
    Brand::new("powerschool", "PowerSchool", Education, 0.6),
    Brand::new("linkedinlearning", "LinkedIn Learning", Education, 0.5),
    // Software
    Brand::new("steampowered", "Steam", Software, 0.9),
    Brand::new("jetbrains", "JetBrains", Software, 0.5),
    Brand::new("docker", "Docker", Software, 0.6),
    Brand::new("npmjs", "npm", Software, 0.6),
    Brand::new("pypi", "PyPI", Software, 0.6),
    Brand::new("stackoverflow", "Stack Overflow", Software, 0.5),
    Brand::new("jira", "Jira", Software, 0.7),
    Brand::new("confluence", "Confluence", Software, 0.7),
    Brand::new("servicenow", "ServiceNow", Software, 0.7),
    Brand::new("workday", "Workday", Software, 0.8),
    Brand::new("adp", "ADP", Software, 0.85),
    Brand::new("paychex", "Paychex", Software, 0.85),
    Brand::new("gusto", "Gusto", Software, 0.8),
    Brand::new("bamboohr", "BambooHR", Software, 0.7),
    Brand::new("sap", "SAP", Software, 0.7),
    Brand::new("netsuite", "NetSuite", Software, 0.7),
    Brand::new("xero", "Xero", Software, 0.8),
    Brand::new("sage", "Sage", Software, 0.7),
    Brand::new("freshbooks", "FreshBooks", Software, 0.7),
    Brand::new("wave", "Wave", Software, 0.6),
    Brand::new("expensify", "Expensify", Software, 0.7),
    Brand::new("concur", "SAP Concur", Software, 0.7),
    Brand::new("citrix", "Citrix", Software, 0.8),
    Brand::new("fortinet", "Fortinet", Software, 0.8),
    Brand::new("paloalto", "Palo Alto Networks", Software, 0.8),
    Brand::new("sophos", "Sophos", Software, 0.7),
    Brand::new("bitdefender", "Bitdefender", Software, 0.7),
    Brand::new("trendmicro", "Trend Micro", Software, 0.7),
    Brand::new("crowdstrike", "CrowdStrike", Software, 0.7),
    Brand::new("globalprotect", "GlobalProtect", Software, 0.85),
    Brand::new("pulsesecure", "Pulse Secure", Software, 0.8),
    Brand::new("openvpn", "OpenVPN", Software, 0.7),
    Brand::new("nordvpn", "NordVPN", Software, 0.7),
    Brand::new("expressvpn", "ExpressVPN", Software, 0.7),
    Brand::new("surfshark", "Surfshark", Software, 0.6),
    Brand::new("protonvpn", "Proton VPN", Software, 0.6),
    Brand::new("dynamics", "Microsoft Dynamics", Software, 0.7),
    Brand::new("teamsmeeting", "Teams Meeting", Software, 0.85),
    Brand::new("outlookweb", "Outlook Web", Software, 0.85),
    // Automotive
    Brand::new("tesla", "Tesla", Automotive, 0.7),
    Brand::new("toyota", "Toyota", Automotive, 0.5),
    Brand::new("honda", "Honda", Automotive, 0.5),
    Brand::new("ford", "Ford", Automotive, 0.5),
    Brand::new("chevrolet", "Chevrolet", Automotive, 0.5),
    Brand::new("bmw", "BMW", Automotive, 0.5),
    Brand::new("mercedes", "Mercedes-Benz", Automotive, 0.5),
    Brand::new("volkswagen", "Volkswagen", Automotive, 0.5),
    Brand::new("audi", "Audi", Automotive, 0.5),
    Brand::new("nissan", "Nissan", Automotive, 0.5),
    Brand::new("hyundai", "Hyundai", Automotive, 0.5),
    Brand::new("kia", "Kia", Automotive, 0.5),
    Brand::new("porsche", "Porsche", Automotive, 0.5),
    Brand::new("volvo", "Volvo", Automotive, 0.5),
    Brand::new("carmax", "CarMax", Automotive, 0.5),
    Brand::new("autotrader", "AutoTrader", Automotive, 0.5),
    Brand::new("carvana", "Carvana", Automotive, 0.5),
    Brand::new("shell", "Shell", Automotive, 0.6),
    Brand::new("exxon", "Exxon", Automotive, 0.5),
    Brand::new("chevron", "Chevron", Automotive, 0.5),
    Brand::new("bp", "BP", Automotive, 0.5),
];
