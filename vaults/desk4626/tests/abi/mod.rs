#![allow(dead_code)]
#![allow(clippy::too_many_arguments)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract Desk4626 {
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);

        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256 allowance);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function desk() external view returns (address desk);
        function asset() external view returns (address asset);
        function totalAssets() external view returns (uint256 totalAssets);
        function convertToShares(uint256 assets) external view returns (uint256 shares);
        function convertToAssets(uint256 shares) external view returns (uint256 assets);
        function maxDeposit(address receiver) external view returns (uint256 maxDeposit);
        function maxMint(address receiver) external view returns (uint256 maxMint);
        function maxWithdraw(address owner) external view returns (uint256 maxWithdraw);
        function maxRedeem(address owner) external view returns (uint256 maxRedeem);
        function previewDeposit(uint256 assets) external view returns (uint256 shares);
        function previewMint(uint256 shares) external view returns (uint256 assets);
        function previewWithdraw(uint256 assets) external view returns (uint256 shares);
        function previewRedeem(uint256 shares) external view returns (uint256 assets);
        function deposit(uint256 assets, address receiver) external returns (uint256 shares);
        function deposit(uint256 assets) external returns (uint256 shares);
        function mint(uint256 shares, address receiver) external returns (uint256 assets);
        function mint(uint256 shares) external returns (uint256 assets);
        function withdraw(uint256 assets, address receiver, address owner) external returns (uint256 shares);
        function withdraw(uint256 assets) external returns (uint256 shares);
        function redeem(uint256 shares, address receiver, address owner) external returns (uint256 assets);
        function redeem(uint256 shares) external returns (uint256 assets);

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidSpender(address spender);
        error ERC20InvalidApprover(address approver);

        error ERC4626ExceededMaxDeposit(address receiver, uint256 assets, uint256 max);
        error ERC4626ExceededMaxMint(address receiver, uint256 shares, uint256 max);
        error ERC4626ExceededMaxWithdraw(address owner, uint256 assets, uint256 max);
        error ERC4626ExceededMaxRedeem(address owner, uint256 shares, uint256 max);
        error Desk4626InvalidDesk(address desk);
        error Desk4626FailedDeskOperation(address desk);
        error SafeErc20FailedOperation(address token);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
        #[derive(Debug, PartialEq)]
        event Deposit(address indexed sender, address indexed owner, uint256 assets, uint256 shares);
        #[derive(Debug, PartialEq)]
        event Withdraw(address indexed sender, address indexed receiver, address indexed owner, uint256 assets, uint256 shares);
    }
);

sol!(
    #[sol(rpc)]
    contract Erc20Mock {
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function mint(address account, uint256 value) external;
    }
);

sol!(
    #[sol(rpc)]
    contract DeskMock {
        function token() external view returns (address token);
        function balanceOf(address account) external view returns (uint256 balance);
        function accrue(address lender, uint256 amount) external;

        error DeskInsufficientBalance(address lender, uint256 balance, uint256 needed);

        #[derive(Debug, PartialEq)]
        event Supplied(address indexed lender, uint256 amount);
        #[derive(Debug, PartialEq)]
        event Withdrawn(address indexed lender, uint256 amount);
        #[derive(Debug, PartialEq)]
        event Accrued(address indexed lender, uint256 amount);
    }
);
